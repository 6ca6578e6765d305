use crate::error::{BadEnvVarSnafu, CorkboardResult};
use dotenvy::var;
use secrecy::SecretString;
use snafu::ResultExt;
use std::sync::Arc;

const DEFAULT_EVALUATION_FORM_URL: &str = "https://docs.google.com/a/trilogyed.com/forms/d/e/1FAIpQLSc_q0CSp5Bpn7lfDAdoPCbBTW-OxWQVhC3gG5P9e6iE4FERjw/viewform";
const DEFAULT_FEEDBACK_FORM_URL: &str = "https://docs.google.com/a/trilogyed.com/forms/d/e/1FAIpQLSdb4ejjbqoqKO-Q4k7zeO_xwykwB0dxYLWYm1mX5Ik45MzEeg/viewform";

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    api_config: Arc<ApiConfig>,
    workflow_links: Arc<WorkflowLinks>,
}

impl RuntimeConfiguration {
    pub fn new() -> CorkboardResult<Self> {
        Ok(Self {
            api_config: Arc::new(ApiConfig::new()?),
            workflow_links: Arc::new(WorkflowLinks::new()),
        })
    }

    pub fn api_config(&self) -> Arc<ApiConfig> {
        self.api_config.clone()
    }

    pub fn workflow_links(&self) -> Arc<WorkflowLinks> {
        self.workflow_links.clone()
    }
}

#[derive(Debug)]
pub struct ApiConfig {
    endpoint: String,
    bearer_token: Option<SecretString>,
}

impl ApiConfig {
    pub fn new() -> CorkboardResult<Self> {
        let endpoint = var("CORKBOARD_GRAPHQL_URL").context(BadEnvVarSnafu {
            name: "CORKBOARD_GRAPHQL_URL",
        })?;
        let bearer_token = var("CORKBOARD_API_TOKEN").ok().map(SecretString::from);

        Ok(Self {
            endpoint,
            bearer_token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn bearer_token(&self) -> Option<&SecretString> {
        self.bearer_token.as_ref()
    }
}

/// External links driven by the clipboard workflow chains.
#[derive(Debug)]
pub struct WorkflowLinks {
    evaluation_form_url: String,
    feedback_form_url: String,
}

impl WorkflowLinks {
    pub fn new() -> Self {
        Self {
            evaluation_form_url: var("CORKBOARD_EVALUATION_FORM_URL")
                .unwrap_or_else(|_| DEFAULT_EVALUATION_FORM_URL.to_string()),
            feedback_form_url: var("CORKBOARD_FEEDBACK_FORM_URL")
                .unwrap_or_else(|_| DEFAULT_FEEDBACK_FORM_URL.to_string()),
        }
    }

    pub fn evaluation_form_url(&self) -> &str {
        &self.evaluation_form_url
    }

    pub fn feedback_form_url(&self) -> &str {
        &self.feedback_form_url
    }
}

impl Default for WorkflowLinks {
    fn default() -> Self {
        Self::new()
    }
}
