/// Side-effecting work requested by `update`, executed outside the transition step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Wait for the startup delay, fetch the catalogue, then dispatch
    /// `Msg::FetchProducts(AsyncTransaction::Completed(..))`.
    FetchCatalogue,
    /// Push a history entry for `segments` and raise a navigation notification.
    Navigate { segments: Vec<String> },
}
