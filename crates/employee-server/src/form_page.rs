// File: src/form_page.rs
// Purpose: Server-rendered employee form, built from the contract's rule table

use crate::AppState;
use axum::{extract::State, response::Html};
use chrono::{DateTime, Utc};
use employee_contract::{contract, FieldSpec, InputKind};
use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Metadata for a form control: HTML5 hints plus client-side rules
#[derive(Debug, Clone)]
pub struct FieldAttrs {
    /// HTML5 native attributes (e.g., "required", "pattern", "type")
    pub html5_attrs: Vec<(&'static str, String)>,
    /// JSON string for the data-validate attribute (client-side WASM validation)
    pub data_validate: String,
    pub label: &'static str,
}

impl FieldAttrs {
    pub fn from_spec(spec: &FieldSpec, now: DateTime<Utc>) -> Self {
        Self {
            html5_attrs: spec.html5_attrs(now),
            data_validate: spec.client_rules(),
            label: spec.label,
        }
    }

    /// Value of an HTML5 attribute, if the rules produced it
    pub fn get(&self, key: &str) -> Option<&str> {
        self.html5_attrs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

const FORM_STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #f3f4f6; }
form { max-width: 36rem; margin: 2rem auto; padding: 1rem; background: #fff; border-radius: .375rem; box-shadow: 0 1px 3px rgba(0,0,0,.15); }
.field { margin-bottom: 1rem; }
.field input, .field select { box-sizing: border-box; width: 100%; padding: .5rem; border: 1px solid #d1d5db; border-radius: .25rem; }
.field .invalid { border-color: #ef4444; }
.error { color: #ef4444; font-size: .875rem; margin: .25rem 0 0; min-height: 1em; }
.actions { display: flex; gap: 1rem; }
.actions button { width: 100%; padding: .5rem; color: #fff; border: 0; border-radius: .25rem; }
button[type=submit] { background: #3b82f6; }
button[type=reset] { background: #6b7280; }
#form-status { margin-top: 1rem; }
"#;

// The WASM module is optional: without it the server still validates.
const FORM_SCRIPT: &str = r#"
const form = document.getElementById('employee-form');
const status = document.getElementById('form-status');
let contract = null;

import(form.dataset.wasm)
  .then(async (m) => { await m.default(); contract = m; })
  .catch((e) => console.warn('Client-side validation unavailable:', e));

function clearErrors() {
  form.querySelectorAll('.error').forEach((p) => { p.textContent = ''; });
  form.querySelectorAll('.invalid').forEach((el) => el.classList.remove('invalid'));
  status.textContent = '';
}

function showErrors(errors) {
  for (const { field, message } of errors) {
    const p = document.getElementById(`${field}-error`);
    const input = form.elements.namedItem(field);
    if (p && !p.textContent) p.textContent = message;
    if (input) input.classList.add('invalid');
  }
}

form.querySelectorAll('[data-validate]').forEach((el) => {
  el.addEventListener('blur', () => {
    if (!contract) return;
    const p = document.getElementById(`${el.name}-error`);
    p.textContent = '';
    el.classList.remove('invalid');
    showErrors(contract.validateWithRules(el.name, el.value, JSON.parse(el.dataset.validate)));
  });
});

form.addEventListener('submit', async (event) => {
  event.preventDefault();
  clearErrors();
  const record = Object.fromEntries(new FormData(form));

  if (contract) {
    const errors = contract.validateRecord(record);
    if (errors.length) { showErrors(errors); return; }
  }

  try {
    const response = await fetch(form.action, {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(record),
    });
    const body = await response.json();
    if (response.status === 201) {
      console.log('Response:', body);
      form.reset();
      status.textContent = body.message;
    } else if (body.errors) {
      console.log('Errors:', body.errors);
      showErrors(body.errors);
    } else {
      console.error('Error during API call:', body.error);
      status.textContent = 'Something went wrong. Please try again.';
    }
  } catch (error) {
    console.error('Error during API call:', error);
    status.textContent = 'Something went wrong. Please try again.';
  }
});

form.addEventListener('reset', () => clearErrors());
"#;

fn render_control(spec: &FieldSpec, attrs: &FieldAttrs) -> Markup {
    match spec.kind {
        InputKind::Select => html! {
            select id=(spec.name) name=(spec.name)
                required[attrs.has("required")]
                data-validate=(attrs.data_validate) {
                option value="" { "Select " (attrs.label) }
                @for choice in spec.choices {
                    option value=(choice) { (choice) }
                }
            }
        },
        _ => html! {
            input id=(spec.name) name=(spec.name)
                type=[attrs.get("type")]
                placeholder=(attrs.label)
                required[attrs.has("required")]
                minlength=[attrs.get("minlength")]
                maxlength=[attrs.get("maxlength")]
                pattern=[attrs.get("pattern")]
                inputmode=[attrs.get("inputmode")]
                max=[attrs.get("max")]
                data-validate=(attrs.data_validate);
        },
    }
}

/// Render the full form page
pub fn render_form(wasm_module: &str, now: DateTime<Utc>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Add Employee" }
                style { (PreEscaped(FORM_STYLE)) }
            }
            body {
                form #employee-form action="/api/employeeadd" method="post" novalidate data-wasm=(wasm_module) {
                    @for spec in contract() {
                        @let attrs = FieldAttrs::from_spec(spec, now);
                        div.field {
                            label for=(spec.name) { (attrs.label) }
                            (render_control(spec, &attrs))
                            p.error id=(format!("{}-error", spec.name)) {}
                        }
                    }
                    div.actions {
                        button type="submit" { "Submit" }
                        button type="reset" { "Reset" }
                    }
                    p #form-status role="status" {}
                }
                script type="module" { (PreEscaped(FORM_SCRIPT)) }
            }
        }
    }
}

/// GET /
pub async fn form_page(State(state): State<AppState>) -> Html<String> {
    Html(render_form(&state.wasm_module, Utc::now()).into_string())
}
