use axum::response::Html;

/// Lead-capture page: a static form that posts JSON to `/api/leads` and
/// renders success/error feedback inline. Industry options must stay in
/// sync with [`crate::types::lead::Industry`].
pub async fn form_page_handler() -> Html<&'static str> {
    Html(FORM_HTML)
}

pub const FORM_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Get in touch</title>
<style>
  body { font-family: Arial, sans-serif; max-width: 480px; margin: 40px auto; padding: 0 16px; }
  label { display: block; margin-top: 12px; font-weight: bold; }
  input, select { width: 100%; padding: 8px; margin-top: 4px; box-sizing: border-box; }
  button { margin-top: 16px; padding: 10px 24px; }
  #feedback { margin-top: 16px; }
  #feedback.ok { color: #1a7f37; }
  #feedback.err { color: #b42318; }
</style>
</head>
<body>
<h1>Get in touch</h1>
<form id="lead-form">
  <label for="name">Name</label>
  <input id="name" name="name" required>
  <label for="email">Work email</label>
  <input id="email" name="email" type="email" required>
  <label for="industry">Industry</label>
  <select id="industry" name="industry" required>
    <option value="technology">Technology</option>
    <option value="healthcare">Healthcare</option>
    <option value="finance">Finance</option>
    <option value="retail">Retail</option>
    <option value="manufacturing">Manufacturing</option>
    <option value="education">Education</option>
    <option value="other">Other</option>
  </select>
  <button type="submit">Request info</button>
</form>
<div id="feedback"></div>
<script>
  const form = document.getElementById('lead-form');
  const feedback = document.getElementById('feedback');
  let sessionId = sessionStorage.getItem('leadgate-session');
  if (!sessionId) {
    sessionId = crypto.randomUUID();
    sessionStorage.setItem('leadgate-session', sessionId);
  }
  form.addEventListener('submit', async (ev) => {
    ev.preventDefault();
    feedback.textContent = '';
    feedback.className = '';
    const payload = {
      name: document.getElementById('name').value,
      email: document.getElementById('email').value,
      industry: document.getElementById('industry').value,
      submitted_at: new Date().toISOString(),
      session_id: sessionId,
    };
    try {
      const resp = await fetch('/api/leads', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(payload),
      });
      if (resp.ok) {
        feedback.textContent = "Thanks! We'll be in touch shortly.";
        feedback.className = 'ok';
        form.reset();
      } else {
        const body = await resp.json().catch(() => null);
        feedback.textContent =
          (body && body.error && body.error.message) || 'Something went wrong. Please try again.';
        feedback.className = 'err';
      }
    } catch (e) {
      feedback.textContent = 'Something went wrong. Please try again.';
      feedback.className = 'err';
    }
  });
</script>
</body>
</html>
"#;
