use yew::prelude::*;

use super::Header;
use crate::hooks::{use_remote, use_session_context, Remote, UseSessionHandle};
use crate::models::PromptRecord;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    match use_session_context() {
        Some(session) => html! { <PromptHistory {session} /> },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
struct PromptHistoryProps {
    session: UseSessionHandle,
}

#[function_component(PromptHistory)]
fn prompt_history(props: &PromptHistoryProps) -> Html {
    let history = use_remote(&props.session, |client| async move { client.get_prompt_history().await });

    let body = match &*history {
        Remote::Loading => html! { <p class="loading">{"Loading history..."}</p> },
        Remote::Failed(message) => html! { <p class="error">{message.clone()}</p> },
        Remote::Ready(records) if records.is_empty() => html! { <p class="empty">{"No prompts submitted yet."}</p> },
        Remote::Ready(records) => html! {
            <ul class="prompt-history">
                { for records.iter().map(render_record) }
            </ul>
        },
    };

    html! {
        <div class="dashboard">
            <Header />
            <main>
                <h2>{"Your prompt history"}</h2>
                {body}
            </main>
        </div>
    }
}

fn render_record(record: &PromptRecord) -> Html {
    let decision = record.decision_label().to_lowercase();
    html! {
        <li key={record.id} class={classes!("prompt", format!("decision-{}", decision))}>
            <div class="prompt-meta">
                <span class="prompt-date">{record.created_at.clone()}</span>
                <span class="prompt-decision">{record.decision_label().to_string()}</span>
            </div>
            <p class="prompt-text">{record.prompt_text.clone()}</p>
            <p class="prompt-use">{format!("Intended use: {}", record.intended_use)}</p>
            if let Some(reason) = &record.reason_summary {
                <p class="prompt-reason">{reason.clone()}</p>
            }
        </li>
    }
}
