use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Path},
    http::{header, HeaderMap, Method, StatusCode},
    response::{Html, IntoResponse},
    Extension, Form,
};
use tera::Context;

use crate::{
    data_formats::{PostArticleForm, PostCommentForm},
    db_helpers::{
        get_article_by_id_in_db, get_recent_commented_articles_in_db, insert_article_in_db,
        insert_comment_in_db, list_comments_for_article_in_db, list_newest_articles_in_db,
    },
    errors::RequestError,
    AppState,
};

type HtmlResult = Result<Html<String>, RequestError>;

// ----------------- Helper Handlers -----------------

/// Anything the static directory cannot answer.
pub async fn unmatched_path(method: Method) -> RequestError {
    if method == Method::GET || method == Method::HEAD {
        RequestError::Http(StatusCode::NOT_FOUND)
    } else {
        RequestError::Http(StatusCode::METHOD_NOT_ALLOWED)
    }
}

pub async fn method_not_allowed() -> RequestError {
    RequestError::Http(StatusCode::METHOD_NOT_ALLOWED)
}

fn render(state: &AppState, template: &'static str, context: &Context) -> HtmlResult {
    state
        .templates
        .render(template, context)
        .map(Html)
        .map_err(|e| RequestError::Template(template, e))
}

fn parse_article_id(raw: &str) -> Result<i64, RequestError> {
    raw.parse::<i64>()
        .map_err(|e| RequestError::Parse("parse article id", e))
}

// A post declaring an empty body binds every field as empty, whatever its content type.
fn bind_form<T: Default>(
    headers: &HeaderMap,
    form: Result<Form<T>, FormRejection>,
) -> Result<T, RequestError> {
    match form {
        Ok(Form(value)) => Ok(value),
        Err(_) if has_empty_body(headers) => Ok(T::default()),
        Err(rejection) => Err(rejection.into()),
    }
}

fn has_empty_body(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_LENGTH)
        .map_or(false, |length| length == "0")
}

// Form posts answer 301, existing clients depend on that status.
fn moved_permanently(location: String) -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)])
}

async fn recent_commented_context(state: &AppState) -> Result<Context, RequestError> {
    let recent = get_recent_commented_articles_in_db(&state.db)
        .await
        .map_err(|e| RequestError::Storage("get recent commented articles", e))?;
    let mut context = Context::new();
    context.insert("RecentCommentedArticles", &recent);
    Ok(context)
}

// ----------------- Page Handlers -----------------

// GET /
pub async fn index(Extension(state): Extension<Arc<AppState>>) -> HtmlResult {
    let mut context = recent_commented_context(&state).await?;
    let articles = list_newest_articles_in_db(&state.db)
        .await
        .map_err(|e| RequestError::Storage("list newest articles", e))?;
    context.insert("Articles", &articles);
    render(&state, "index.html", &context)
}

// GET /article/:articleid
pub async fn get_article(
    Extension(state): Extension<Arc<AppState>>,
    Path(article_id): Path<String>,
) -> HtmlResult {
    let mut context = recent_commented_context(&state).await?;
    let article_id = parse_article_id(&article_id)?;
    let article = get_article_by_id_in_db(&state.db, article_id)
        .await
        .map_err(|e| RequestError::Storage("get article", e))?;
    let comments = list_comments_for_article_in_db(&state.db, article_id)
        .await
        .map_err(|e| RequestError::Storage("list comments", e))?;
    context.insert("Article", &article);
    context.insert("Comments", &comments);
    render(&state, "article.html", &context)
}

// GET /post
pub async fn get_post_form(Extension(state): Extension<Arc<AppState>>) -> HtmlResult {
    let context = recent_commented_context(&state).await?;
    render(&state, "post.html", &context)
}

// ----------------- Submit Handlers -----------------

// POST /post
pub async fn post_article(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    form: Result<Form<PostArticleForm>, FormRejection>,
) -> Result<impl IntoResponse, RequestError> {
    let PostArticleForm { title, body } = bind_form(&headers, form)?;
    let id = insert_article_in_db(&state.db, &title, &body)
        .await
        .map_err(|e| RequestError::Storage("insert article", e))?;
    tracing::info!(article_id = id, "article created");
    Ok(moved_permanently("/".to_owned()))
}

// POST /comment/:articleid
pub async fn post_comment(
    Extension(state): Extension<Arc<AppState>>,
    Path(article_id): Path<String>,
    headers: HeaderMap,
    form: Result<Form<PostCommentForm>, FormRejection>,
) -> Result<impl IntoResponse, RequestError> {
    let article_id = parse_article_id(&article_id)?;
    let PostCommentForm { name, body } = bind_form(&headers, form)?;
    let id = insert_comment_in_db(&state.db, article_id, &name, &body)
        .await
        .map_err(|e| RequestError::Storage("insert comment", e))?;
    tracing::info!(article_id, comment_id = id, "comment created");
    Ok(moved_permanently(format!("/article/{}", article_id)))
}
