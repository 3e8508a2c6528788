use crate::{llm::summarizer::Summarizer, yt::TranscriptFetcher, BriefProcessor};

pub struct BriefProcessorBuilder<F = (), S = ()> {
    transcript_fetcher: F,
    summarizer: S,
}

impl BriefProcessorBuilder {
    pub fn new() -> Self {
        Self {
            transcript_fetcher: (),
            summarizer: (),
        }
    }
}

impl<F, S> BriefProcessorBuilder<F, S> {
    pub fn transcript_fetcher<F2: TranscriptFetcher + Send + Sync + 'static>(
        self,
        transcript_fetcher: F2,
    ) -> BriefProcessorBuilder<F2, S> {
        BriefProcessorBuilder {
            transcript_fetcher,
            summarizer: self.summarizer,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> BriefProcessorBuilder<F, S2> {
        BriefProcessorBuilder {
            transcript_fetcher: self.transcript_fetcher,
            summarizer,
        }
    }
}

impl<F, S> BriefProcessorBuilder<F, S>
where
    F: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub fn build(self) -> BriefProcessor<F, S> {
        BriefProcessor {
            transcript_fetcher: self.transcript_fetcher,
            summarizer: self.summarizer,
        }
    }
}
