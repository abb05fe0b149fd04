// Vues génériques liste / formulaire, partagées par les six tables

use validator::ValidationErrors;

use crate::middleware::SessionUser;
use crate::services::crud_service::CrudRecord;
use crate::views::{escape, layout};

/// Ce qu'une table expose à l'écran
pub trait CrudView: CrudRecord {
    /// Segment d'URL: /{PATH}/list, /{PATH}/add, ...
    const PATH: &'static str;
    const TITLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn row(model: &Self::Model) -> Vec<String>;
    fn fields(form: &Self::Form) -> Vec<FormField>;
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub kind: InputKind,
}

impl FormField {
    pub fn new(name: &'static str, label: &'static str, value: impl Into<String>, kind: InputKind) -> Self {
        Self { name, label, value: value.into(), kind }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum InputKind {
    Text,
    Number,
    Password,
    TextArea,
    Select(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Update(i32),
}

pub fn list_url<R: CrudView>() -> String {
    format!("/{}/list", R::PATH)
}

pub fn list_page<R: CrudView>(user: &SessionUser, records: &[R::Model]) -> String {
    let header: String = R::COLUMNS
        .iter()
        .map(|c| format!("<th>{}</th>", escape(c)))
        .collect();

    let rows: String = records
        .iter()
        .map(|model| {
            let id = R::id(model);
            let cells: String = R::row(model)
                .iter()
                .map(|value| format!("<td>{}</td>", escape(value)))
                .collect();
            format!(
                r#"<tr>{cells}<td><a href="/{path}/update/{id}">Edit</a> | <a href="/{path}/delete/{id}">Delete</a></td></tr>
"#,
                cells = cells,
                path = R::PATH,
                id = id,
            )
        })
        .collect();

    let body = format!(
        r#"<p><a href="/{path}/add">Add New</a></p>
<table>
<thead><tr>{header}<th>Action</th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#,
        path = R::PATH,
        header = header,
        rows = rows,
    );

    layout(R::TITLE, Some(user), &body)
}

/// Formulaire d'ajout ou d'édition; les valeurs soumises sont ré-affichées avec les erreurs
pub fn form_page<R: CrudView>(
    user: &SessionUser,
    mode: FormMode,
    form: &R::Form,
    errors: Option<&ValidationErrors>,
) -> String {
    let (title, action, submit) = match mode {
        FormMode::Add => (
            format!("Add {}", R::TITLE),
            format!("/{}/validate", R::PATH),
            "Add",
        ),
        FormMode::Update(id) => (
            format!("Update {}", R::TITLE),
            format!("/{}/update/{}", R::PATH, id),
            "Update",
        ),
    };

    let fields: String = R::fields(form)
        .iter()
        .map(|field| render_field(field, errors))
        .collect();

    let body = format!(
        r#"<form class="record" action="{action}" method="post">
{fields}<div class="actions">
<a href="{cancel}">Cancel</a>
<button type="submit">{submit}</button>
</div>
</form>"#,
        action = action,
        fields = fields,
        cancel = list_url::<R>(),
        submit = submit,
    );

    layout(&title, Some(user), &body)
}

fn render_field(field: &FormField, errors: Option<&ValidationErrors>) -> String {
    let name = field.name;
    let value = escape(&field.value);

    let input = match field.kind {
        InputKind::Text => format!(r#"<input type="text" id="{name}" name="{name}" value="{value}">"#),
        InputKind::Number => {
            format!(r#"<input type="number" step="any" id="{name}" name="{name}" value="{value}">"#)
        }
        // Jamais de valeur pré-remplie
        InputKind::Password => format!(r#"<input type="password" id="{name}" name="{name}" value="">"#),
        InputKind::TextArea => format!(r#"<textarea id="{name}" name="{name}" rows="3">{value}</textarea>"#),
        InputKind::Select(options) => {
            let choices: String = options
                .iter()
                .map(|option| {
                    let selected = if *option == field.value { " selected" } else { "" };
                    format!(r#"<option value="{0}"{1}>{0}</option>"#, escape(option), selected)
                })
                .collect();
            format!(
                r#"<select id="{name}" name="{name}"><option value="">Choose a role</option>{choices}</select>"#
            )
        }
    };

    let messages: String = errors
        .map(|errors| field_messages(errors, name))
        .unwrap_or_default()
        .iter()
        .map(|message| format!(r#"<p class="error">{}</p>"#, escape(message)))
        .collect();

    format!(
        "<label for=\"{name}\">{label}</label>\n{input}\n{messages}\n",
        name = name,
        label = escape(field.label),
        input = input,
        messages = messages,
    )
}

/// Messages d'erreur d'un champ, dans l'ordre des validations
pub fn field_messages(errors: &ValidationErrors, field: &str) -> Vec<String> {
    errors
        .field_errors()
        .get(field)
        .map(|list| {
            list.iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}
