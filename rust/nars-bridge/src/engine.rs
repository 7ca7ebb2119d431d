//! The reasoning engine seam.

use async_trait::async_trait;

use crate::BridgeError;

/// A NARS reasoner that accepts logic-language input lines and answers
/// with its raw textual output.
#[async_trait]
pub trait ReasoningEngine: Send {
    /// Submit one input line, then run `cycles` inference steps if given.
    async fn submit(&mut self, statement: &str, cycles: Option<u32>) -> Result<String, BridgeError>;

    /// Forget everything.
    async fn reset(&mut self) -> Result<(), BridgeError>;
}

#[async_trait]
impl<E> ReasoningEngine for Box<E>
where
    E: ReasoningEngine + ?Sized,
{
    async fn submit(&mut self, statement: &str, cycles: Option<u32>) -> Result<String, BridgeError> {
        (**self).submit(statement, cycles).await
    }

    async fn reset(&mut self) -> Result<(), BridgeError> {
        (**self).reset().await
    }
}
