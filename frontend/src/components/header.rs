use shared::AuthState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub auth: AuthState,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"Expense Console"}</h1>
                {if let Some(user) = props.auth.user() {
                    let on_logout = props.on_logout.clone();
                    html! {
                        <div class="session-display">
                            <span class="session-user">
                                {format!("{} ({})", user.name, user.email)}
                            </span>
                            <button
                                class="btn btn-secondary logout-btn"
                                onclick={Callback::from(move |_| on_logout.emit(()))}
                            >
                                {"Log Out"}
                            </button>
                        </div>
                    }
                } else {
                    html! { <span class="session-display">{"Not signed in"}</span> }
                }}
            </div>
        </header>
    }
}
