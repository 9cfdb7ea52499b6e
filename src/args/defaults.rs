/// Interaction target used by FID and INP when none is configured: the
/// consent-banner accept control present on the default target pages.
pub const DEFAULT_SELECTOR: &str = "#onetrust-accept-btn-handler";
