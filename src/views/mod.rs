// Vues HTML rendues côté serveur

pub mod crud;
pub mod pages;
pub mod records;

use crate::middleware::SessionUser;

pub const STYLESHEET: &str = include_str!("style.css");

/// Échappe une valeur avant de l'insérer dans du HTML (texte ou attribut)
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Page complète: en-tête, navigation (si connecté) et contenu
pub fn layout(title: &str, user: Option<&SessionUser>, body: &str) -> String {
    let nav = match user {
        Some(user) => navigation(user),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Poseidon</title>
<link rel="stylesheet" href="/css/style.css">
</head>
<body>
<header>
<a class="brand" href="/">Poseidon</a>
{nav}
</header>
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        nav = nav,
        body = body,
    )
}

fn navigation(user: &SessionUser) -> String {
    let mut links = vec![
        ("/bidList/list", "Bid List"),
        ("/curvePoint/list", "Curve Points"),
        ("/rating/list", "Ratings"),
        ("/trade/list", "Trades"),
        ("/ruleName/list", "Rules"),
    ];
    if user.is_admin() {
        links.push(("/user/list", "Users"));
    }

    let items: String = links
        .iter()
        .map(|(href, label)| format!(r#"<a href="{}">{}</a>"#, href, label))
        .collect::<Vec<_>>()
        .join(" | ");

    format!(
        r#"<nav>{items}</nav>
<form class="logout" action="/app-logout" method="post">
<span>Logged in user: <b>{username}</b></span>
<button type="submit">Logout</button>
</form>"#,
        items = items,
        username = escape(&user.username),
    )
}
