use crate::middleware::SessionUser;
use crate::views::{escape, layout};

pub fn home(user: Option<&SessionUser>) -> String {
    let body = match user {
        Some(user) => format!(
            r#"<p>Welcome back, {}.</p>
<p><a href="/bidList/list">Go to the bid list</a></p>"#,
            escape(&user.username)
        ),
        None => r#"<p>Financial back-office for bids, curve points, ratings, rules and trades.</p>
<p><a href="/app/login">Log in</a></p>"#
            .to_string(),
    };
    layout("Home", user, &body)
}

/// Message générique en cas d'échec: la cause n'est jamais précisée
pub fn login(error: bool, logged_out: bool) -> String {
    let mut notices = String::new();
    if error {
        notices.push_str(r#"<p class="error">Invalid username or password.</p>"#);
    }
    if logged_out {
        notices.push_str(r#"<p class="notice">You have been logged out.</p>"#);
    }

    let body = format!(
        r#"{notices}
<form class="record" action="/app/login" method="post">
<label for="username">Username</label>
<input type="text" id="username" name="username" autofocus>
<label for="password">Password</label>
<input type="password" id="password" name="password">
<div class="actions"><button type="submit">Login</button></div>
</form>"#,
        notices = notices
    );
    layout("Login", None, &body)
}

pub fn forbidden(username: &str) -> String {
    let body = format!(
        r#"<p>Logged in user: <b>{}</b></p>
<p class="error">You are not authorized for the requested data.</p>
<p><a href="/bidList/list">Back to the bid list</a></p>"#,
        escape(username)
    );
    layout("Access denied", None, &body)
}

pub fn error_page(title: &str, message: &str) -> String {
    let body = format!(
        r#"<p class="error">{}</p>
<p><a href="/">Home</a></p>"#,
        escape(message)
    );
    layout(title, None, &body)
}
