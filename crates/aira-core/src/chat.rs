use crate::error::Result;
use crate::llm::{ChatMessage, LanguageModel};
use crate::prompt::CHAT_SYSTEM_PROMPT;
use crate::reformat::reformat;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

/// One conversation with the model, shared by every caller of the chat endpoint.
///
/// The transcript starts with a single system message and then alternates
/// user/assistant turns. `submit` holds the lock for the whole
/// append → model call → append sequence, so concurrent callers are served
/// one at a time and the alternation holds under concurrency.
///
/// The entry count is mirrored outside the lock so it can be read while a
/// model call is in flight.
pub struct ChatSession {
    model: Arc<dyn LanguageModel>,
    transcript: Mutex<Vec<ChatMessage>>,
    len: AtomicUsize,
}

impl ChatSession {
    /// A session opened with the AIRA persona prompt.
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self::with_system_prompt(model, CHAT_SYSTEM_PROMPT)
    }

    pub fn with_system_prompt(model: Arc<dyn LanguageModel>, system: impl Into<String>) -> Self {
        Self {
            model,
            transcript: Mutex::new(vec![ChatMessage::system(system)]),
            len: AtomicUsize::new(1),
        }
    }

    /// Ask `question` with the full transcript as context and record the reply.
    ///
    /// On a model failure the user turn is dropped again and the error returned.
    pub async fn submit(&self, question: &str) -> Result<String> {
        let mut transcript = self.transcript.lock().await;
        transcript.push(ChatMessage::user(question));
        self.len.store(transcript.len(), Ordering::Release);

        let raw = match self.model.complete(&transcript).await {
            Ok(raw) => raw,
            Err(e) => {
                transcript.pop();
                self.len.store(transcript.len(), Ordering::Release);
                log::warn!(
                    "Chat turn failed, transcript left at {} entries: {}",
                    transcript.len(),
                    e
                );
                return Err(e);
            }
        };

        let reply = reformat(&raw);
        transcript.push(ChatMessage::assistant(reply.clone()));
        self.len.store(transcript.len(), Ordering::Release);
        log::debug!("Chat transcript now {} entries", transcript.len());

        Ok(reply)
    }

    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.lock().await.clone()
    }

    /// Number of transcript entries. Never waits on an in-flight `submit`.
    pub fn transcript_len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }
}
