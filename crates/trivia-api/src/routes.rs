//! Route table and handlers
//!
//! Each handler does its store work through `AppState` in one synchronous
//! call and only then builds the JSON response.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::middleware::from_fn;
use axum::routing::{delete, get, post};
use axum::{Extension, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use trivia_core::errors::{ExError, ExErrorKind, TriviaError};
use trivia_core::parse_page;
use trivia_core_types::RequestContext;
use trivia_engine::{EngineCommand, EngineCommandResult, EngineQuery, EngineQueryResult};

use crate::error::ApiError;
use crate::middleware::{assign_request_id, cors};
use crate::payload::{self, QuestionsPost};
use crate::state::AppState;

type ApiResult = Result<Json<Value>, ApiError>;

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    fn page(&self) -> usize {
        parse_page(self.page.as_deref())
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(post_questions))
        .route("/questions/:id", delete(delete_question))
        .route("/categories", get(list_categories))
        .route("/categories/:id/questions", get(questions_by_category))
        .route("/quizzes", post(next_quiz_question))
        .fallback(not_found)
        .with_state(state)
        .layer(from_fn(assign_request_id))
        .layer(from_fn(cors))
}

async fn list_questions(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Query(params): Query<PageParams>,
) -> ApiResult {
    let query = EngineQuery::ListQuestions {
        page: params.page(),
    };
    match state.query(query).map_err(|e| ApiError::new(e, &ctx))? {
        EngineQueryResult::Questions(page) => Ok(Json(json!({
            "success": true,
            "questions": page.questions,
            "total_questions": page.total_questions,
            "categories": page.categories,
            "current_category": null,
        }))),
        _ => Err(mismatched("list_questions", &ctx)),
    }
}

async fn post_questions(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Query(params): Query<PageParams>,
    body: Bytes,
) -> ApiResult {
    let body = payload::parse_json(&body).map_err(|e| ApiError::new(e, &ctx))?;

    match payload::questions_post(&body).map_err(|e| ApiError::new(e, &ctx))? {
        QuestionsPost::Search(term) => {
            let query = EngineQuery::SearchQuestions {
                term,
                page: params.page(),
            };
            match state.query(query).map_err(|e| ApiError::new(e, &ctx))? {
                EngineQueryResult::Search(page) => Ok(Json(json!({
                    "success": true,
                    "questions": page.questions,
                    "total_questions": page.total_questions,
                    "current_category": null,
                }))),
                _ => Err(mismatched("search_questions", &ctx)),
            }
        }
        QuestionsPost::Create(question) => {
            let cmd = EngineCommand::CreateQuestion {
                question,
                page: params.page(),
            };
            match state.command(cmd).map_err(|e| ApiError::new(e, &ctx))? {
                EngineCommandResult::Created(created) => Ok(Json(json!({
                    "success": true,
                    "created": created.created,
                    "questions": created.questions,
                    "total_questions": created.total_questions,
                }))),
                _ => Err(mismatched("create_question", &ctx)),
            }
        }
    }
}

async fn delete_question(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
    Query(params): Query<PageParams>,
) -> ApiResult {
    let question_id = path_id(&id, &ctx)?;
    let cmd = EngineCommand::DeleteQuestion {
        question_id,
        page: params.page(),
    };
    match state.command(cmd).map_err(|e| ApiError::new(e, &ctx))? {
        EngineCommandResult::Deleted(deleted) => Ok(Json(json!({
            "success": true,
            "deleted": deleted.deleted,
            "questions": deleted.questions,
            "total_questions": deleted.total_questions,
        }))),
        _ => Err(mismatched("delete_question", &ctx)),
    }
}

async fn list_categories(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> ApiResult {
    match state
        .query(EngineQuery::ListCategories)
        .map_err(|e| ApiError::new(e, &ctx))?
    {
        EngineQueryResult::Categories(listing) => Ok(Json(json!({
            "success": true,
            "categories": listing.categories,
        }))),
        _ => Err(mismatched("list_categories", &ctx)),
    }
}

async fn questions_by_category(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> ApiResult {
    let category_id = path_id(&id, &ctx)?;
    match state
        .query(EngineQuery::QuestionsByCategory { category_id })
        .map_err(|e| ApiError::new(e, &ctx))?
    {
        EngineQueryResult::ByCategory(listing) => Ok(Json(json!({
            "success": true,
            "questions": listing.questions,
            "total_questions": listing.total_questions,
            "current_category": listing.current_category.as_map(),
        }))),
        _ => Err(mismatched("questions_by_category", &ctx)),
    }
}

async fn next_quiz_question(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    body: Bytes,
) -> ApiResult {
    let body = payload::parse_json(&body).map_err(|e| ApiError::new(e, &ctx))?;
    let request = payload::quiz_request(&body).map_err(|e| ApiError::new(e, &ctx))?;

    let query = EngineQuery::NextQuizQuestion {
        previous: request.previous.clone(),
        filter: request.filter,
    };
    match state.query(query).map_err(|e| ApiError::new(e, &ctx))? {
        EngineQueryResult::Quiz(quiz) => Ok(Json(json!({
            "success": true,
            "category": request.category,
            "question": quiz.question,
            "previousQuestions": request.previous,
        }))),
        _ => Err(mismatched("next_quiz_question", &ctx)),
    }
}

async fn not_found(Extension(ctx): Extension<RequestContext>) -> ApiError {
    ApiError::new(
        ExError::new(ExErrorKind::NotFound)
            .with_op("route")
            .with_message("no route matches"),
        &ctx,
    )
}

/// Non-numeric ids never match a resource
fn path_id(raw: &str, ctx: &RequestContext) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| {
        ApiError::new(
            ExError::new(ExErrorKind::NotFound)
                .with_op("route")
                .with_message(format!("'{}' is not an id", raw)),
            ctx,
        )
    })
}

fn mismatched(op: &str, ctx: &RequestContext) -> ApiError {
    ApiError::new(
        TriviaError::Internal {
            message: format!("engine returned an unexpected result for {}", op),
        },
        ctx,
    )
}
