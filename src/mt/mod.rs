/// Machine Translation Module
///
/// Provider abstraction for turning source-language terms into the target
/// language. The dictionary builder only sees [`MachineTranslator`]; the
/// concrete providers are:
///
/// 1. **Google Translate** - Google Translate API v2 over HTTPS
/// 2. **Mock** - deterministic offline translator for tests and dry runs
pub mod google_translate;
pub mod mock;
pub mod translator;

pub use google_translate::GoogleTranslateProvider;
pub use mock::{MockMode, MockTranslator};
pub use translator::{MachineTranslator, normalize_locale};
