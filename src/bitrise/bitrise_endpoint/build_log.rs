use crate::bitrise::bitrise_endpoint::Endpoint;

/// Endpoint for the log of one build.
pub struct LogOfBuild {
    /// Slug of the Bitrise app.
    pub app_slug: String,

    /// Slug of the build.
    pub build_slug: String,
}

impl Endpoint for LogOfBuild {
    fn endpoint(&self) -> String {
        format!("apps/{}/builds/{}/log", self.app_slug, self.build_slug)
    }

    fn target(&self) -> &'static str {
        "build log"
    }

    fn context(&self) -> String {
        format!(
            "[build_slug: {}, app_slug: {}]",
            self.build_slug, self.app_slug
        )
    }
}
