use crux_core::capability::{CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NavigationTarget {
    /// New browsing context / external app, the screen stays open.
    NewContext,
    /// Replace the current context.
    CurrentContext,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavigateOperation {
    pub url: String,
    pub target: NavigationTarget,
}

impl Operation for NavigateOperation {
    type Output = ();
}

/// Hands a URL to the OS; fire-and-forget.
#[derive(crux_core::macros::Capability)]
pub struct Navigate<Ev> {
    context: CapabilityContext<NavigateOperation, Ev>,
}

impl<Ev> Navigate<Ev>
where
    Ev: 'static,
{
    pub fn new(context: CapabilityContext<NavigateOperation, Ev>) -> Self {
        Self { context }
    }

    pub fn open(&self, url: impl Into<String>, target: NavigationTarget) {
        let operation = NavigateOperation {
            url: url.into(),
            target,
        };
        let ctx = self.context.clone();
        self.context.spawn(async move {
            ctx.notify_shell(operation).await;
        });
    }
}
