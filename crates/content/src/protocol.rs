// ABOUTME: The getMovieInfo / setupMapping message protocol between the popup and a tab.
// ABOUTME: ContentScript answers requests using the Extractor and the MappingController.

use reelcopy_scout::{Extractor, MovieRecord};
use serde::{Deserialize, Serialize};

use crate::controller::MappingController;
use crate::page::Page;
use crate::store::MappingStore;

/// A message sent to the content script of a tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum Request {
    #[serde(rename = "getMovieInfo")]
    GetMovieInfo,
    #[serde(rename = "setupMapping")]
    SetupMapping {
        #[serde(rename = "movieData")]
        movie_data: MovieRecord,
    },
}

/// Reply to a [`Request`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<MovieRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Default::default()
        }
    }

    pub fn with_data(data: MovieRecord) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Both halves of the tab-side logic behind one message handler.
pub struct ContentScript<S> {
    extractor: Extractor,
    controller: MappingController<S>,
}

impl<S: MappingStore> ContentScript<S> {
    pub fn new(extractor: Extractor, controller: MappingController<S>) -> Self {
        Self {
            extractor,
            controller,
        }
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    pub fn controller(&self) -> &MappingController<S> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut MappingController<S> {
        &mut self.controller
    }

    /// Answers one request against `page`.
    pub async fn handle(&mut self, page: &mut Page, request: Request) -> Response {
        match request {
            Request::GetMovieInfo => match self.extractor.extract(page.url(), page.document()) {
                Ok(record) => Response::with_data(record),
                Err(e) => Response::failure(e.to_string()),
            },
            Request::SetupMapping { movie_data } => {
                // A stored mapping only pre-selects dropdowns; failing to read it
                // still opens the modal.
                if let Err(e) = self.controller.load_saved(page.url()).await {
                    tracing::debug!(error = %e, "opening modal without saved mapping");
                }
                match self.controller.present(page, movie_data) {
                    Ok(()) => Response::ok(),
                    Err(e) => Response::failure(e.to_string()),
                }
            }
        }
    }

    /// Parses a JSON request and answers it. Unknown actions are a parse error.
    pub async fn handle_json(
        &mut self,
        page: &mut Page,
        request: &str,
    ) -> Result<Response, serde_json::Error> {
        let request: Request = serde_json::from_str(request)?;
        Ok(self.handle(page, request).await)
    }
}
