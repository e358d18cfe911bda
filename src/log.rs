use tracing::Span;
use tracing_subscriber::fmt::time;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub fn init_log(verbose: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::builder().parse_lossy(match verbose {
        true => "drand_verifier=trace",
        false => "drand_verifier=info",
    });

    let layer = tracing_subscriber::fmt::layer()
        .with_timer(time::time())
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

/// Span carrier for everything fetched from one randomness server.
#[derive(Clone)]
pub struct Logger {
    pub span: Span,
}

impl Logger {
    pub fn register_source(address: &str) -> Self {
        let span = tracing::info_span!("", source = address);
        Self { span }
    }

    /// Child span for a single requested round, 0 stands for latest.
    pub fn new_round(&self, round: u64) -> Self {
        let span = tracing::info_span!(parent: &self.span, "", round);
        Self { span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::info;

    #[test]
    fn simple_log() {
        // other tests may have installed the subscriber already
        let _ = init_log(true);
        let source_log = Logger::register_source("127.0.0.1:8081");
        info!(parent: &source_log.span, "source");

        let round_log = source_log.new_round(42);
        info!(parent: &round_log.span, "source.round");
    }
}
