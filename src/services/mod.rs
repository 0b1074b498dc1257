// forgemark stateless services
// Services hold no persistent state: URL resolution, platform detection, import/export.

pub mod import_export;
pub mod platform_detector;
pub mod url_resolver;
