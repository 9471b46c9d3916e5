mod components;
mod hooks;
mod services;

use yew::prelude::*;

use components::forms::auth_forms::{LoginForm, RegisterForm};
use components::forms::expense_forms::ExpensesPanel;
use components::forms::user_forms::UsersPanel;
use components::header::Header;
use components::output_panel::{OutputPanel, OutputState};
use components::tab_bar::{Tab, TabBar};
use hooks::use_expenses::use_expenses;
use hooks::use_session::use_session;
use hooks::use_users::use_users;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = ApiClient::new();

    // Single shared output region; every action reports into it.
    let output = use_state(|| OutputState::Idle);
    let on_output = {
        let output = output.clone();
        Callback::from(move |state| output.set(state))
    };

    let session = use_session(&api_client, &on_output);
    let token = session.state.auth.token().map(str::to_string);
    let users = use_users(&api_client, token.clone(), &session.actions.expire, &on_output);
    let expenses = use_expenses(&api_client, token, &session.actions.expire, &on_output);

    let active_tab = use_state(|| Tab::Users);
    let on_select_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab| active_tab.set(tab))
    };

    html! {
        <>
            <Header
                auth={session.state.auth.clone()}
                on_logout={session.actions.logout.clone()}
            />

            <main class="main">
                <div class="container">
                    {if session.state.auth.is_authenticated() {
                        html! {
                            <>
                                <TabBar active={*active_tab} on_select={on_select_tab} />
                                {match *active_tab {
                                    Tab::Users => html! {
                                        <UsersPanel
                                            state={users.state.clone()}
                                            actions={users.actions.clone()}
                                        />
                                    },
                                    Tab::Expenses => html! {
                                        <ExpensesPanel
                                            state={expenses.state.clone()}
                                            actions={expenses.actions.clone()}
                                        />
                                    },
                                }}
                            </>
                        }
                    } else {
                        html! {
                            <div class="auth-panels">
                                <LoginForm
                                    email={session.state.login_email.clone()}
                                    password={session.state.login_password.clone()}
                                    busy={session.state.busy}
                                    on_email_change={session.actions.on_login_email_change.clone()}
                                    on_password_change={session.actions.on_login_password_change.clone()}
                                    on_submit={session.actions.login.clone()}
                                />
                                <RegisterForm
                                    name={session.state.register_name.clone()}
                                    email={session.state.register_email.clone()}
                                    password={session.state.register_password.clone()}
                                    busy={session.state.busy}
                                    on_name_change={session.actions.on_register_name_change.clone()}
                                    on_email_change={session.actions.on_register_email_change.clone()}
                                    on_password_change={session.actions.on_register_password_change.clone()}
                                    on_submit={session.actions.register.clone()}
                                />
                            </div>
                        }
                    }}

                    <OutputPanel state={(*output).clone()} />
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
