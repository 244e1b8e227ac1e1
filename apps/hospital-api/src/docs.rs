use axum::response::Html;

/// Static API documentation page. Presentation only; the endpoint list
/// mirrors the routers.
pub async fn api_docs() -> Html<&'static str> {
    Html(API_DOCS_HTML)
}

const API_DOCS_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>MidCity Hospital API Documentation</title>
</head>
<body>
  <h1>MidCity Hospital Management API</h1>

  <h2>Public endpoints</h2>
  <ul>
    <li><code>GET /</code> - health banner</li>
    <li><code>POST /api/auth/register</code> - {email, password, name}</li>
    <li><code>POST /api/auth/login</code> - {email, password}, returns a bearer token</li>
    <li><code>GET /api/doctors</code> - list doctors</li>
    <li><code>GET /api/doctors/export</code> - export all doctors as JSON</li>
    <li><code>POST /api/labs/book</code> - book a lab appointment</li>
    <li><code>POST /api/checkup/book</code> - book a checkup appointment</li>
    <li><code>POST /api/surgery/book</code> - multipart form, optional <code>prescription</code> file</li>
    <li><code>POST /api/contact</code> - send a contact message</li>
  </ul>

  <h2>Protected endpoints (Authorization: Bearer TOKEN)</h2>
  <ul>
    <li><code>POST /api/auth/send-verify-otp</code></li>
    <li><code>POST /api/auth/logout</code></li>
    <li><code>GET /api/doctors/by-department?department=Cardiology</code> - doctor/viewer only</li>
    <li><code>GET /api/admin/appointments</code> - doctor/viewer only</li>
    <li><code>GET /api/admin/medicines</code> - doctor/viewer only</li>
    <li><code>POST /api/admin/medicines</code> - doctor/viewer only</li>
  </ul>

  <p>Uploaded prescriptions are served from <code>/uploads/&lt;filename&gt;</code>.</p>
</body>
</html>
"#;
