use super::workflow::JobDescriptor;
use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer};

/// Null reads as `T::default()`. Used for names so a plain scalar such as `3.10`
/// keeps the text it was written with.
pub(super) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `jobs:` with no body, and `build:` with no body, both decode to defaults.
pub(super) fn jobs_in_document_order<'de, D>(
    deserializer: D,
) -> Result<IndexMap<String, JobDescriptor>, D::Error>
where
    D: Deserializer<'de>,
{
    let jobs = Option::<IndexMap<String, Option<JobDescriptor>>>::deserialize(deserializer)?;
    Ok(jobs
        .unwrap_or_default()
        .into_iter()
        .map(|(job_id, job)| (job_id, job.unwrap_or_default()))
        .collect())
}
