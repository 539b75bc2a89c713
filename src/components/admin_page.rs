use yew::prelude::*;

use super::Header;
use crate::hooks::{use_remote, use_session_context, Remote, UseSessionHandle};
use crate::models::UserStats;

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    match use_session_context() {
        Some(session) => html! { <UsersStats {session} /> },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
struct UsersStatsProps {
    session: UseSessionHandle,
}

#[function_component(UsersStats)]
fn users_stats(props: &UsersStatsProps) -> Html {
    let stats = use_remote(&props.session, |client| async move { client.get_users_stats().await });

    let body = match &*stats {
        Remote::Loading => html! { <p class="loading">{"Loading users..."}</p> },
        Remote::Failed(message) => html! { <p class="error">{message.clone()}</p> },
        Remote::Ready(rows) => html! {
            <table class="users-stats">
                <thead>
                    <tr>
                        <th>{"User"}</th>
                        <th>{"Prompts"}</th>
                        <th>{"Accepted"}</th>
                        <th>{"Declined"}</th>
                        <th>{"Acceptance"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for rows.iter().map(render_row) }
                </tbody>
            </table>
        },
    };

    html! {
        <div class="dashboard admin">
            <Header />
            <main>
                <h2>{"Users"}</h2>
                {body}
            </main>
        </div>
    }
}

fn render_row(row: &UserStats) -> Html {
    let rate = row
        .acceptance_rate()
        .map(|rate| format!("{:.0}%", rate * 100.0))
        .unwrap_or_else(|| "-".to_string());

    html! {
        <tr key={row.id}>
            <td>{row.email.clone()}</td>
            <td>{row.total_prompts.to_string()}</td>
            <td>{row.accepted_count.to_string()}</td>
            <td>{row.declined_count.to_string()}</td>
            <td>{rate}</td>
        </tr>
    }
}
