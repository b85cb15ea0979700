//! OpinionMarketCap landing page.
//!
//! Routes:
//! - `GET /*` streams the landing page: hero, top questions, how it works
//!   and the newsletter form.
//! - `POST /api/subscribe` forwards a newsletter signup to the provider.
//!   JSON bodies (from the client script) get a JSON reply; form-encoded
//!   bodies (no script) get the page back with the outcome shown and a
//!   meta refresh that returns the form to idle.

mod api;
mod data;
mod page;
mod script;
mod sections;
mod shell;
mod styles;
mod subscribe;

use anyhow::{anyhow, Context as _};
use futures::SinkExt;
use spin_sdk::http::{Fields, IncomingRequest, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use omc_core::{Method, RequestContext, RouteConfig, WorkloadError, WorkloadManifest};
use omc_data::{SpinTransport, StaticQuestionSource};
use omc_newsletter::{NewsletterConfig, SubscriptionClient, SubscriptionForm};
use omc_observability::{LogFormat, LogLevel, StructuredLogger};
use omc_streaming::StreamingSink;

use data::LandingPageContent;
use page::{render_page, stream_page};
use subscribe::{submit_email, SubscribeResponse};

const WORKLOAD: &str = "opinion-landing";
const PAGE_CACHE_CONTROL: &str = "public, max-age=300";
const REPLY_CACHE_CONTROL: &str = "no-store";

fn manifest() -> WorkloadManifest {
    WorkloadManifest::new(WORKLOAD, env!("CARGO_PKG_VERSION"))
        .with_route(RouteConfig::new("/api/subscribe", "subscribe").with_methods(&[Method::Post]))
        .with_route(RouteConfig::new("/*", "landing").with_methods(&[Method::Get, Method::Head]))
}

/// Landing page handler.
#[http_component]
async fn handle_opinion_landing(req: IncomingRequest, response_out: ResponseOutparam) {
    let method = convert_method(&req.method());
    let path = req.path_with_query().unwrap_or_else(|| "/".to_string());
    let headers = req
        .headers()
        .entries()
        .into_iter()
        .map(|(name, value)| (name, String::from_utf8_lossy(&value).into_owned()));

    let ctx = RequestContext::new(method.unwrap_or(Method::Get), &path).with_headers(headers);
    let logger = build_logger(&ctx);

    let route = match method {
        Some(method) => manifest().resolve(method, &ctx.path).map(|r| r.handler.clone()),
        None => Err(WorkloadError::BadRequest(format!("unsupported method {:?}", req.method()))),
    };

    let result = match route {
        Ok(handler) => {
            let logger = logger.clone().with_route(handler.as_str());
            if handler == "subscribe" {
                handle_subscribe(req, &ctx, &logger, response_out).await
            } else {
                handle_landing(&ctx, &logger, response_out).await
            }
        }
        Err(err) => {
            logger
                .warn_builder("route not resolved")
                .field("method", method.map_or("OTHER", |m| m.as_str()))
                .field("path", ctx.path.as_str())
                .field("error", err.to_string())
                .emit();
            send_status(&ctx, err.status_code(), response_out)
        }
    };

    if let Err(e) = result {
        logger.error_builder("request failed").field("error", format!("{e:#}")).emit();
    }
}

fn convert_method(method: &spin_sdk::http::Method) -> Option<Method> {
    use spin_sdk::http::Method as Spin;
    match method {
        Spin::Get => Some(Method::Get),
        Spin::Head => Some(Method::Head),
        Spin::Post => Some(Method::Post),
        Spin::Put => Some(Method::Put),
        Spin::Delete => Some(Method::Delete),
        Spin::Patch => Some(Method::Patch),
        Spin::Options => Some(Method::Options),
        _ => None,
    }
}

async fn handle_landing(
    ctx: &RequestContext,
    logger: &StructuredLogger,
    response_out: ResponseOutparam,
) -> anyhow::Result<()> {
    let content = LandingPageContent::load();
    let config = load_config(logger);
    let form = SubscriptionForm::new(config.reset_delay);
    let reset_ms = config.reset_delay.as_millis() as u64;

    let page = render_page(&content, &StaticQuestionSource::default(), &form, reset_ms, None, logger).await;
    stream_html(ctx, logger, &page, PAGE_CACHE_CONTROL, response_out).await
}

async fn handle_subscribe(
    req: IncomingRequest,
    ctx: &RequestContext,
    logger: &StructuredLogger,
    response_out: ResponseOutparam,
) -> anyhow::Result<()> {
    let kind = ctx.body_kind();
    let body = req
        .into_body()
        .await
        .map_err(|e| anyhow!("failed to read request body: {e:?}"))?;

    let email = match api::parse_email(kind, &body) {
        Ok(email) => email,
        Err(err) => {
            logger.warn_builder("bad subscribe request").field("error", err.to_string()).emit();
            return send_status(ctx, err.status_code(), response_out);
        }
    };

    let client = SubscriptionClient::new(load_config(logger), SpinTransport);
    let submission = submit_email(&client, email, logger).await;

    match submission.into_response(kind) {
        SubscribeResponse::Json { status, body: reply } => {
            let headers = response_headers(ctx, "application/json", REPLY_CACHE_CONTROL)?;
            let response = OutgoingResponse::new(headers);
            response
                .set_status_code(status)
                .map_err(|_| anyhow!("invalid status code {status}"))?;
            let mut body = response.take_body();
            response_out.set(response);

            body.send(reply)
                .await
                .map_err(|e| anyhow!("failed to write reply: {e:?}"))?;
            Ok(())
        }
        SubscribeResponse::Page { form, refresh } => {
            let reset_ms = form.reset_delay().as_millis() as u64;
            let content = LandingPageContent::load();
            let page = render_page(
                &content,
                &StaticQuestionSource::default(),
                &form,
                reset_ms,
                Some(refresh),
                logger,
            )
            .await;
            stream_html(ctx, logger, &page, REPLY_CACHE_CONTROL, response_out).await
        }
    }
}

/// Per-request logger. `log_level` and `log_format` variables are optional.
fn build_logger(ctx: &RequestContext) -> StructuredLogger {
    let mut logger = StructuredLogger::new(ctx.request_id.clone()).with_workload(WORKLOAD);
    if let Some(level) = variable("log_level").and_then(|v| LogLevel::parse(&v)) {
        logger = logger.with_min_level(level);
    }
    if let Some(format) = variable("log_format").and_then(|v| LogFormat::parse(&v)) {
        logger = logger.with_format(format);
    }
    logger
}

fn variable(name: &str) -> Option<String> {
    spin_sdk::variables::get(name).ok()
}

/// Newsletter settings from Spin variables. An invalid setting falls back
/// to its default and is logged; the other settings still apply.
fn load_config(logger: &StructuredLogger) -> NewsletterConfig {
    let (config, errors) = NewsletterConfig::from_lookup(variable);
    for e in errors {
        logger
            .error_builder("invalid newsletter setting")
            .field("error", e.to_string())
            .emit();
    }
    config
}

async fn stream_html(
    ctx: &RequestContext,
    logger: &StructuredLogger,
    page: &page::RenderedPage,
    cache_control: &str,
    response_out: ResponseOutparam,
) -> anyhow::Result<()> {
    let headers = response_headers(ctx, "text/html; charset=utf-8", cache_control)?;
    let response = OutgoingResponse::new(headers);
    response
        .set_status_code(200)
        .map_err(|_| anyhow!("invalid status code 200"))?;

    let body = response.take_body();
    response_out.set(response);

    let mut sink = StreamingSink::new(body, ctx.timing.clone());
    stream_page(&mut sink, page).await.context("streaming landing page")?;

    let timing = sink.timing();
    let mut entry = logger
        .info_builder("page streamed")
        .field_u64("sections", sink.sections_sent().len() as u64);
    if let Some(shell) = timing.time_to_shell() {
        entry = entry.duration_ms("time_to_shell_ms", shell);
    }
    entry.duration_ms("total_ms", timing.elapsed()).emit();
    Ok(())
}

fn send_status(ctx: &RequestContext, status: u16, response_out: ResponseOutparam) -> anyhow::Result<()> {
    let headers = response_headers(ctx, "text/plain; charset=utf-8", REPLY_CACHE_CONTROL)?;
    let response = OutgoingResponse::new(headers);
    response
        .set_status_code(status)
        .map_err(|_| anyhow!("invalid status code {status}"))?;
    response_out.set(response);
    Ok(())
}

fn response_headers(ctx: &RequestContext, content_type: &str, cache_control: &str) -> anyhow::Result<Fields> {
    let header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), content_type.as_bytes().to_vec()),
        ("x-request-id".to_owned(), ctx.request_id.to_string().into_bytes()),
        ("cache-control".to_owned(), cache_control.as_bytes().to_vec()),
    ];
    Fields::from_list(&header_list).map_err(|e| anyhow!("invalid response headers: {e:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_route_only_accepts_post() {
        let manifest = manifest();
        let route = manifest.resolve(Method::Post, "/api/subscribe").unwrap();
        assert_eq!(route.handler, "subscribe");

        let err = manifest.resolve(Method::Get, "/api/subscribe").unwrap_err();
        assert_eq!(err.status_code(), 405);
    }

    #[test]
    fn test_landing_route_catches_everything_else() {
        let manifest = manifest();
        assert_eq!(manifest.resolve(Method::Get, "/").unwrap().handler, "landing");
        assert_eq!(manifest.resolve(Method::Head, "/roadmap").unwrap().handler, "landing");
        assert_eq!(manifest.resolve(Method::Post, "/").unwrap_err().status_code(), 405);
    }
}
