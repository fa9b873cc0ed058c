//! Bridge builder with typestate pattern.

use std::{marker::PhantomData, sync::Arc};

use super::AuthorizationTraceBridge;
use crate::{
    Result,
    caller::{self, CallerResolver},
    config::BridgeConfig,
    sink::TraceSink,
};

/// Marker type: sink not yet provided.
pub struct NoSink;

/// Marker type: sink has been provided.
pub struct HasSink;

/// Builder for [`AuthorizationTraceBridge`].
///
/// Uses the typestate pattern so a bridge cannot be built without a sink.
///
/// ## Required Configuration
///
/// - `sink()` / `shared_sink()`: where spans are reported
///
/// ## Optional Configuration
///
/// - `config()`: span naming and context options
/// - `caller_resolver()`: how call-sites are found (defaults to
///   [`BacktraceCaller`](crate::caller::BacktraceCaller) with the
///   `backtrace` feature, [`NoCaller`](crate::caller::NoCaller) otherwise)
///
/// ## Example
///
/// ```rust
/// use gate_trace::{AuthorizationTraceBridge, BridgeConfig};
/// use gate_trace::caller::NoCaller;
/// use gate_trace::sink::NoopSink;
///
/// let bridge = AuthorizationTraceBridge::builder()
///     .sink(NoopSink)
///     .config(BridgeConfig::builder().category("policy").build())
///     .caller_resolver(NoCaller)
///     .build()
///     .unwrap();
///
/// assert_eq!(bridge.config().category, "policy");
/// ```
pub struct BridgeBuilder<SinkState> {
    sink: Option<Arc<dyn TraceSink>>,
    caller: Option<Arc<dyn CallerResolver>>,
    config: BridgeConfig,
    _sink_state: PhantomData<SinkState>,
}

impl BridgeBuilder<NoSink> {
    /// Creates a new bridge builder.
    pub fn new() -> Self {
        Self { sink: None, caller: None, config: BridgeConfig::default(), _sink_state: PhantomData }
    }

    /// Sets the sink spans are reported to.
    pub fn sink(self, sink: impl TraceSink + 'static) -> BridgeBuilder<HasSink> {
        self.shared_sink(Arc::new(sink))
    }

    /// Sets a sink that is shared with other components.
    pub fn shared_sink(self, sink: Arc<dyn TraceSink>) -> BridgeBuilder<HasSink> {
        BridgeBuilder {
            sink: Some(sink),
            caller: self.caller,
            config: self.config,
            _sink_state: PhantomData,
        }
    }
}

impl Default for BridgeBuilder<NoSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> BridgeBuilder<S> {
    /// Sets the bridge configuration.
    #[must_use]
    pub fn config(mut self, config: BridgeConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the call-site resolver.
    #[must_use]
    pub fn caller_resolver(mut self, resolver: impl CallerResolver + 'static) -> Self {
        self.caller = Some(Arc::new(resolver));
        self
    }
}

impl BridgeBuilder<HasSink> {
    /// Validates the configuration and builds the bridge.
    pub fn build(self) -> Result<AuthorizationTraceBridge> {
        self.config.validate()?;

        let Some(sink) = self.sink else {
            return Err(crate::Error::internal("sink missing from a HasSink builder"));
        };
        let caller = self.caller.unwrap_or_else(caller::default_resolver);

        tracing::debug!(
            category = %self.config.category,
            capture_caller = self.config.capture_caller,
            "authorization trace bridge built"
        );

        Ok(AuthorizationTraceBridge::from_parts(sink, caller, self.config))
    }
}
