use actix_web::HttpRequest;
use chrono::Local;

// Function for access log and error log
pub async fn log_request(
    req: HttpRequest,
    status_code: u16,
) -> Result<String, Box<dyn std::error::Error>> {
    let referer = req.headers()
        .get("Referer")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let user_agent = req.headers()
        .get("User-Agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    let client_ip = req.peer_addr().map(|addr| addr.ip().to_string()).unwrap_or_else(|| "unknown".to_string());
    let request_method = req.method().as_str().to_string();
    let request_uri = req.uri().to_string();
    let http_version = format!("{:?}", req.version());

    // Access log format; the response status distinguishes error lines.
    let log_message = format!(
        "{client_ip} - - [{time}] \"{request_method} {request_uri} {http_version}\" {status_code} \"{referer}\" \"{user_agent}\"",
        client_ip = client_ip,
        time = Local::now().format("%d/%b/%Y:%H:%M:%S %z"),
        request_method = request_method,
        request_uri = request_uri,
        http_version = http_version,
        status_code = status_code,
        referer = referer,
        user_agent = user_agent,
    );

    Ok(log_message)
}
