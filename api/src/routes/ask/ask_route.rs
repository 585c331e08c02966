//! POST /ask: answers an HR policy question with the active strategy.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{error, info, warn};

use crate::{
    core::app_state::AppState,
    routes::ask::ask_request::{AskRequest, AskResponse},
};

/// Reply for a missing, blank or unreadable question.
pub const EMPTY_QUESTION_REPLY: &str = "Please type a question.";

/// Reply when the answerer fails; details go to the log only.
pub const ERROR_REPLY: &str = "Sorry, I encountered an error processing your request.";

/// Handler: POST /ask
///
/// Always answers 200 with `{"response": ...}`.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:5000/ask \
///   -H 'content-type: application/json' \
///   -d '{"message":"How many casual leave days do I get?"}'
/// ```
pub async fn ask(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Json<AskResponse> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!(error = %rejection, "unreadable /ask body");
            return Json(AskResponse::new(EMPTY_QUESTION_REPLY));
        }
    };

    let Some(question) = body.question() else {
        return Json(AskResponse::new(EMPTY_QUESTION_REPLY));
    };

    let strategy = state.answerer.kind();
    info!(%strategy, question_len = question.len(), "answering question");

    match state.answerer.answer(question).await {
        Ok(answer) => Json(AskResponse::new(answer)),
        Err(e) => {
            error!(%strategy, error = %e, "failed to answer question");
            Json(AskResponse::new(ERROR_REPLY))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        extract::FromRequest,
        http::{Request, header},
    };
    use contextor::{AnswerFuture, Answerer, ContextorError, StrategyKind, UnavailableAnswerer};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers with a canned result and counts calls.
    struct StubAnswerer {
        calls: AtomicUsize,
        reply: Result<&'static str, &'static str>,
    }

    impl StubAnswerer {
        fn ok(reply: &'static str) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                reply: Ok(reply),
            })
        }

        fn failing(reason: &'static str) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                reply: Err(reason),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Answerer for StubAnswerer {
        fn kind(&self) -> StrategyKind {
            StrategyKind::Retrieval
        }

        fn answer<'a>(&'a self, question: &'a str) -> AnswerFuture<'a> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move {
                match self.reply {
                    Ok(r) => Ok(format!("{r} ({question})")),
                    Err(e) => Err(ContextorError::Config(e.to_string())),
                }
            })
        }
    }

    fn state(answerer: Arc<dyn Answerer>) -> State<Arc<AppState>> {
        State(Arc::new(AppState::new(answerer)))
    }

    fn message(msg: Option<&str>) -> Result<Json<AskRequest>, JsonRejection> {
        Ok(Json(AskRequest {
            message: msg.map(str::to_string),
        }))
    }

    async fn extract(raw: &'static str) -> Result<Json<AskRequest>, JsonRejection> {
        let req = Request::builder()
            .method("POST")
            .uri("/ask")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(raw))
            .unwrap();
        Json::<AskRequest>::from_request(req, &()).await
    }

    #[tokio::test]
    async fn answers_with_active_strategy() {
        let stub = StubAnswerer::ok("12 days");
        let Json(res) = ask(state(stub.clone()), message(Some("Casual leave?"))).await;
        assert_eq!(res.response, "12 days (Casual leave?)");
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn blank_or_missing_message_skips_answerer() {
        let stub = StubAnswerer::ok("unused");
        for msg in [None, Some(""), Some("   \n")] {
            let Json(res) = ask(state(stub.clone()), message(msg)).await;
            assert_eq!(res.response, EMPTY_QUESTION_REPLY);
        }
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn unreadable_body_gets_prompt_reply() {
        let stub = StubAnswerer::ok("unused");
        for raw in ["not json", r#"{"message": 42}"#, "[1,2]"] {
            let payload = extract(raw).await;
            assert!(payload.is_err(), "{raw} should be rejected");
            let Json(res) = ask(state(stub.clone()), payload).await;
            assert_eq!(res.response, EMPTY_QUESTION_REPLY);
        }
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn null_message_is_treated_as_empty() {
        let stub = StubAnswerer::ok("unused");
        let payload = extract(r#"{"message": null}"#).await;
        let Json(res) = ask(state(stub.clone()), payload).await;
        assert_eq!(res.response, EMPTY_QUESTION_REPLY);
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn answerer_failure_maps_to_error_reply() {
        let stub = StubAnswerer::failing("upstream 503");
        let Json(res) = ask(state(stub.clone()), message(Some("Gym benefit?"))).await;
        assert_eq!(res.response, ERROR_REPLY);
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn unavailable_answerer_maps_to_error_reply() {
        let degraded = Arc::new(UnavailableAnswerer::new(
            StrategyKind::Retrieval,
            "index build failed",
        ));
        let Json(res) = ask(state(degraded), message(Some("Notice period?"))).await;
        assert_eq!(res.response, ERROR_REPLY);
    }
}
