pub mod anthropic;
pub mod error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Anthropic,
    Replay,
}

/// Text-completion endpoint that answers advisor prompts.
#[async_trait::async_trait]
pub trait Producer: Send + Sync {
    fn provider(&self) -> Provider;

    /// Sends one prompt, returns the reply text verbatim.
    async fn complete(&self, prompt: &str) -> anyhow::Result<String>;
}

/// Answers every prompt with a previously captured reply.
#[derive(Debug, Clone)]
pub struct ReplayProducer {
    reply: String,
}

impl ReplayProducer {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait::async_trait]
impl Producer for ReplayProducer {
    fn provider(&self) -> Provider {
        Provider::Replay
    }

    async fn complete(&self, _prompt: &str) -> anyhow::Result<String> {
        Ok(self.reply.clone())
    }
}
