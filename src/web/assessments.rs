use crate::domain::assessment::{AssessmentDefinition, AssessmentKind};
use crate::domain::bank::{Category, Question, QuestionId};
use crate::domain::likert::Likert;
use crate::middleware::rate_limit::limit_session_creation;
use crate::state::SharedState;
use crate::web::sessions::{session_view, SessionView};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

pub fn router(state: SharedState) -> Router {
    let limiter = state.limiter.clone();
    Router::new()
        .route("/", get(list))
        .route("/:kind/questions", get(questions))
        .route(
            "/:kind/sessions",
            post(start_session)
                .route_layer(middleware::from_fn_with_state(limiter, limit_session_creation)),
        )
        .with_state(state)
}

#[derive(Serialize)]
pub struct OptionView {
    value: u8,
    label: &'static str,
}

#[derive(Serialize)]
pub struct QuestionView {
    id: QuestionId,
    text: String,
    category: Category,
    category_label: &'static str,
    position: usize,
    options: Vec<OptionView>,
}

#[derive(Serialize)]
struct CategoryView {
    category: Category,
    label: &'static str,
    question_count: usize,
}

#[derive(Serialize)]
struct AssessmentSummary {
    kind: AssessmentKind,
    title: &'static str,
    description: &'static str,
    question_count: usize,
    categories: Vec<CategoryView>,
}

#[derive(Serialize)]
struct QuestionBankResponse {
    kind: AssessmentKind,
    title: &'static str,
    questions: Vec<QuestionView>,
}

pub fn question_view(question: &Question, position: usize) -> QuestionView {
    QuestionView {
        id: question.id,
        text: question.text.clone(),
        category: question.category,
        category_label: question.category.label(),
        position,
        options: Likert::ALL
            .iter()
            .map(|option| OptionView {
                value: option.value(),
                label: option.label(),
            })
            .collect(),
    }
}

fn summary(definition: &AssessmentDefinition) -> AssessmentSummary {
    AssessmentSummary {
        kind: definition.kind,
        title: definition.title,
        description: definition.description,
        question_count: definition.bank.len(),
        categories: definition
            .bank
            .categories()
            .into_iter()
            .map(|category| CategoryView {
                category,
                label: category.label(),
                question_count: definition.bank.in_category(category).count(),
            })
            .collect(),
    }
}

async fn list(State(state): State<SharedState>) -> Json<Vec<AssessmentSummary>> {
    Json(state.catalog.all().into_iter().map(summary).collect())
}

async fn questions(
    Path(kind): Path<AssessmentKind>,
    State(state): State<SharedState>,
) -> Json<QuestionBankResponse> {
    let definition = state.definition(kind);
    Json(QuestionBankResponse {
        kind,
        title: definition.title,
        questions: definition
            .bank
            .questions()
            .iter()
            .enumerate()
            .map(|(position, question)| question_view(question, position))
            .collect(),
    })
}

async fn start_session(
    Path(kind): Path<AssessmentKind>,
    State(state): State<SharedState>,
) -> (StatusCode, Json<SessionView>) {
    let (id, session) = state.open_session(kind).await;
    tracing::info!("Started {} assessment session {}", kind.as_str(), id);
    let view = session_view(id, &session, state.definition(kind));
    (StatusCode::CREATED, Json(view))
}
