use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RegisterFormProps {
    pub name: String,
    pub email: String,
    pub password: String,
    pub busy: bool,
    pub on_name_change: Callback<Event>,
    pub on_email_change: Callback<Event>,
    pub on_password_change: Callback<Event>,
    pub on_submit: Callback<()>,
}

#[function_component(RegisterForm)]
pub fn register_form(props: &RegisterFormProps) -> Html {
    html! {
        <section class="panel-section">
            <h3>{"Register"}</h3>
            <form onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-group">
                    <label for="register-name">{"Name"}</label>
                    <input
                        type="text"
                        id="register-name"
                        placeholder="Ada Lovelace"
                        value={props.name.clone()}
                        onchange={props.on_name_change.clone()}
                        disabled={props.busy}
                    />
                </div>

                <div class="form-group">
                    <label for="register-email">{"Email"}</label>
                    <input
                        type="email"
                        id="register-email"
                        placeholder="ada@example.com"
                        value={props.email.clone()}
                        onchange={props.on_email_change.clone()}
                        disabled={props.busy}
                    />
                </div>

                <div class="form-group">
                    <label for="register-password">{"Password"}</label>
                    <input
                        type="password"
                        id="register-password"
                        value={props.password.clone()}
                        onchange={props.on_password_change.clone()}
                        disabled={props.busy}
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled={props.busy}>
                    {if props.busy { "Working..." } else { "Create Account" }}
                </button>
            </form>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub email: String,
    pub password: String,
    pub busy: bool,
    pub on_email_change: Callback<Event>,
    pub on_password_change: Callback<Event>,
    pub on_submit: Callback<()>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    html! {
        <section class="panel-section">
            <h3>{"Log In"}</h3>
            <form onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-group">
                    <label for="login-email">{"Email"}</label>
                    <input
                        type="email"
                        id="login-email"
                        placeholder="ada@example.com"
                        value={props.email.clone()}
                        onchange={props.on_email_change.clone()}
                        disabled={props.busy}
                    />
                </div>

                <div class="form-group">
                    <label for="login-password">{"Password"}</label>
                    <input
                        type="password"
                        id="login-password"
                        value={props.password.clone()}
                        onchange={props.on_password_change.clone()}
                        disabled={props.busy}
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled={props.busy}>
                    {if props.busy { "Signing In..." } else { "Log In" }}
                </button>
            </form>
        </section>
    }
}
