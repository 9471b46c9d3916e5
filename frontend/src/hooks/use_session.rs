use shared::{AuthState, LoginRequest, RegisterRequest, Session, SESSION_EXPIRED_MESSAGE};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::output_panel::OutputState;
use crate::services::api::ApiClient;
use crate::services::session::SessionStore;

/// Authentication state plus the register/login form fields
#[derive(Clone, PartialEq)]
pub struct SessionState {
    pub auth: AuthState,
    pub register_name: String,
    pub register_email: String,
    pub register_password: String,
    pub login_email: String,
    pub login_password: String,
    pub busy: bool,
}

pub struct UseSessionResult {
    pub state: SessionState,
    pub actions: UseSessionActions,
}

#[derive(Clone, PartialEq)]
pub struct UseSessionActions {
    pub register: Callback<()>,
    pub login: Callback<()>,
    pub logout: Callback<()>,
    /// Teardown path for a 401/403 from any endpoint: clears the
    /// persisted session and shows the fixed session-expired message.
    pub expire: Callback<()>,
    pub on_register_name_change: Callback<Event>,
    pub on_register_email_change: Callback<Event>,
    pub on_register_password_change: Callback<Event>,
    pub on_login_email_change: Callback<Event>,
    pub on_login_password_change: Callback<Event>,
}

/// Owns the session: the auth state machine, the two persisted keys,
/// and the register/login/logout actions. Nothing else writes session
/// state or storage.
#[hook]
pub fn use_session(api_client: &ApiClient, output: &Callback<OutputState>) -> UseSessionResult {
    let auth = use_state(|| match SessionStore::load() {
        Some(session) => AuthState::signed_in(session),
        None => AuthState::Anonymous,
    });
    let register_name = use_state(String::new);
    let register_email = use_state(String::new);
    let register_password = use_state(String::new);
    let login_email = use_state(String::new);
    let login_password = use_state(String::new);
    let busy = use_state(|| false);

    let expire = {
        let auth = auth.clone();
        let output = output.clone();
        use_callback((), move |_: (), _| {
            SessionStore::clear();
            auth.set(AuthState::signed_out());
            output.emit(OutputState::Error(SESSION_EXPIRED_MESSAGE.to_string()));
        })
    };

    let register = {
        let api_client = api_client.clone();
        let register_name = register_name.clone();
        let register_email = register_email.clone();
        let register_password = register_password.clone();
        let busy = busy.clone();
        let output = output.clone();
        let expire = expire.clone();

        use_callback((), move |_: (), _| {
            let request = match RegisterRequest::from_form(
                &register_name,
                &register_email,
                &register_password,
            ) {
                Ok(request) => request,
                Err(e) => {
                    output.emit(OutputState::Error(e.to_string()));
                    return;
                }
            };
            output.emit(OutputState::Pending("Creating account...".to_string()));

            let api_client = api_client.clone();
            let register_password = register_password.clone();
            let busy = busy.clone();
            let output = output.clone();
            let expire = expire.clone();
            spawn_local(async move {
                busy.set(true);
                match api_client.register(&request).await {
                    Ok(response) => {
                        if response.is_auth_failure() {
                            expire.emit(());
                        } else if response.ok {
                            register_password.set(String::new());
                            output.emit(OutputState::Response {
                                message: Some("Account created! You can log in now.".to_string()),
                                response,
                            });
                        } else {
                            output.emit(OutputState::Response {
                                message: None,
                                response,
                            });
                        }
                    }
                    Err(message) => output.emit(OutputState::Error(message)),
                }
                busy.set(false);
            });
        })
    };

    let login = {
        let api_client = api_client.clone();
        let auth = auth.clone();
        let login_email = login_email.clone();
        let login_password = login_password.clone();
        let busy = busy.clone();
        let output = output.clone();
        let expire = expire.clone();

        use_callback((), move |_: (), _| {
            let request = match LoginRequest::from_form(&login_email, &login_password) {
                Ok(request) => request,
                Err(e) => {
                    output.emit(OutputState::Error(e.to_string()));
                    return;
                }
            };
            output.emit(OutputState::Pending("Signing in...".to_string()));

            let api_client = api_client.clone();
            let auth = auth.clone();
            let login_email = login_email.clone();
            let login_password = login_password.clone();
            let busy = busy.clone();
            let output = output.clone();
            let expire = expire.clone();
            spawn_local(async move {
                busy.set(true);
                match api_client.login(&request).await {
                    Ok(response) => {
                        if response.is_auth_failure() {
                            expire.emit(());
                        } else if response.ok {
                            let token = response.login_token().map(str::to_string);
                            match token {
                                Some(token) => match Session::from_token(&token) {
                                    Ok(session) => {
                                        SessionStore::save(&session);
                                        let name = session.user.name.clone();
                                        auth.set(AuthState::signed_in(session));
                                        login_email.set(String::new());
                                        login_password.set(String::new());
                                        output.emit(OutputState::Response {
                                            message: Some(format!("Welcome back, {}!", name)),
                                            response,
                                        });
                                    }
                                    Err(e) => {
                                        gloo::console::error!(
                                            "Token decode failed:",
                                            e.to_string()
                                        );
                                        output.emit(OutputState::Error(format!(
                                            "Could not decode session token: {}",
                                            e
                                        )));
                                    }
                                },
                                None => output.emit(OutputState::Error(
                                    "Login response did not include a token".to_string(),
                                )),
                            }
                        } else {
                            output.emit(OutputState::Response {
                                message: None,
                                response,
                            });
                        }
                    }
                    Err(message) => output.emit(OutputState::Error(message)),
                }
                busy.set(false);
            });
        })
    };

    let logout = {
        let auth = auth.clone();
        let output = output.clone();
        use_callback((), move |_: (), _| {
            SessionStore::clear();
            auth.set(AuthState::signed_out());
            output.emit(OutputState::Notice("Signed out.".to_string()));
        })
    };

    let on_register_name_change = {
        let register_name = register_name.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            register_name.set(input.value());
        })
    };

    let on_register_email_change = {
        let register_email = register_email.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            register_email.set(input.value());
        })
    };

    let on_register_password_change = {
        let register_password = register_password.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            register_password.set(input.value());
        })
    };

    let on_login_email_change = {
        let login_email = login_email.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            login_email.set(input.value());
        })
    };

    let on_login_password_change = {
        let login_password = login_password.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            login_password.set(input.value());
        })
    };

    let state = SessionState {
        auth: (*auth).clone(),
        register_name: (*register_name).clone(),
        register_email: (*register_email).clone(),
        register_password: (*register_password).clone(),
        login_email: (*login_email).clone(),
        login_password: (*login_password).clone(),
        busy: *busy,
    };

    let actions = UseSessionActions {
        register,
        login,
        logout,
        expire,
        on_register_name_change,
        on_register_email_change,
        on_register_password_change,
        on_login_email_change,
        on_login_password_change,
    };

    UseSessionResult { state, actions }
}
