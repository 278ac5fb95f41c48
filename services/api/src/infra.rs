use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    /// Built web UI served for non-API routes, when one is available.
    pub(crate) ui_bundle: Option<Arc<PathBuf>>,
}

#[cfg(test)]
pub(crate) fn test_state(ui_bundle: Option<PathBuf>, ready: bool) -> AppState {
    let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
    AppState {
        readiness: Arc::new(AtomicBool::new(ready)),
        metrics: Arc::new(recorder.handle()),
        ui_bundle: ui_bundle.map(Arc::new),
    }
}
