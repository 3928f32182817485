use crate::interactive::domain::models::{FilterField, MutationRequest};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    /// Run several side effects in order (e.g. re-fetch the list and
    /// schedule a notice clear after a successful mutation).
    Batch(Vec<Command>),
    LoadSavedSearches,
    LoadCatalog(FilterField),
    RunMutation(MutationRequest),
    ExecuteJobQuery,
    ScheduleClearNotice(u64), // delay in milliseconds
}
