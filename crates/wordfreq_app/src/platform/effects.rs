use engine_logging::{engine_info, engine_warn};
use wordfreq_core::{Effect, Msg};
use wordfreq_engine::{LogProgressSink, PageTextEngine};

/// Executes core effects against the engine and turns results back into messages.
#[derive(Clone)]
pub struct EffectRunner {
    engine: PageTextEngine,
}

impl EffectRunner {
    pub fn new(engine: PageTextEngine) -> Self {
        Self { engine }
    }

    pub async fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut replies = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect {
                Effect::FetchUrl { url } => {
                    engine_info!("FetchUrl url_len={} url={}", url.len(), url);
                    let reply = match self.engine.page_text(&url, &LogProgressSink).await {
                        Ok(page) => Msg::PageFetched {
                            url,
                            text: page.text,
                            title: page.title,
                        },
                        Err(err) => {
                            engine_warn!("Fetch of {} failed: {}", url, err);
                            Msg::FetchFailed {
                                url,
                                message: err.to_string(),
                            }
                        }
                    };
                    replies.push(reply);
                }
            }
        }
        replies
    }
}
