use std::io;

fn main() {
    gha_runner::init_logging();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = gha_runner::run(std::env::args_os(), &mut stdout.lock(), &mut stderr.lock());
    std::process::exit(code);
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
