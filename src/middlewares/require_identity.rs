/*!
 * 网关身份中间件
 *
 * 认证与会话由上游网关负责（本服务不做登录校验）。网关在转发请求时
 * 注入已验证的身份头，此中间件负责提取并放入请求扩展：
 *
 * - `X-Auth-User-Id`: 已验证用户的数字 ID（必需）
 * - `X-Auth-Roles`: 逗号分隔的角色列表，如 `ta,faculty`（可选）
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::{web, App, HttpServer};
 * use crate::middlewares::require_identity::RequireIdentity;
 *
 * HttpServer::new(|| {
 *     App::new()
 *         .service(
 *             web::scope("/api")
 *                 .wrap(RequireIdentity)
 *                 .route("/protected", web::get().to(protected_handler))
 *         )
 * })
 * ```
 *
 * 处理程序中通过 `RequireIdentity::extract_user_id(&req)` 取回身份。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, info};

use super::create_error_response;

const USER_ID_HEADER: &str = "X-Auth-User-Id";
const ROLES_HEADER: &str = "X-Auth-Roles";

/// 网关注入的已验证身份
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: i64,
    pub roles: Vec<String>,
}

#[derive(Clone)]
pub struct RequireIdentity;

// 辅助函数：从请求头解析身份
fn extract_identity_from_headers(req: &ServiceRequest) -> Result<Identity, String> {
    let user_id = req
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| format!("Missing {USER_ID_HEADER} header"))?
        .parse::<i64>()
        .map_err(|_| format!("Invalid {USER_ID_HEADER} header"))?;

    let roles = req
        .headers()
        .get(ROLES_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|s| {
            s.split(',')
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty())
                .collect()
        })
        .unwrap_or_default();

    Ok(Identity { user_id, roles })
}

impl<S, B> Transform<S, ServiceRequest> for RequireIdentity
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireIdentityMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireIdentityMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireIdentityMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireIdentityMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, "").map_into_right_body(),
                ));
            }

            match extract_identity_from_headers(&req) {
                Ok(identity) => {
                    debug!("Gateway identity resolved for ID: {}", identity.user_id);
                    req.extensions_mut().insert(identity);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "Identity extraction failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取身份信息
impl RequireIdentity {
    /// 从请求扩展中提取完整身份
    /// 此函数应该在应用了RequireIdentity中间件的路由处理程序中使用
    pub fn extract_identity(req: &actix_web::HttpRequest) -> Option<Identity> {
        req.extensions().get::<Identity>().cloned()
    }

    /// 从请求扩展中提取用户ID
    /// 此函数应该在应用了RequireIdentity中间件的路由处理程序中使用
    pub fn extract_user_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<Identity>().map(|id| id.user_id)
    }

    /// 检查当前身份是否具有指定角色
    pub fn has_role(req: &actix_web::HttpRequest, role: &str) -> bool {
        req.extensions()
            .get::<Identity>()
            .is_some_and(|id| id.roles.iter().any(|r| r == role))
    }
}
