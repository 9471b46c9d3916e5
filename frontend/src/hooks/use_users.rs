use shared::{parse_id, CreateUserRequest, UpdateUserRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::output_panel::OutputState;
use crate::services::api::ApiClient;

/// Form state for the user panel
#[derive(Clone, PartialEq)]
pub struct UsersState {
    pub lookup_id: String,
    pub create_name: String,
    pub create_email: String,
    pub update_id: String,
    pub update_name: String,
    pub update_email: String,
    pub delete_id: String,
    pub busy: bool,
}

pub struct UseUsersResult {
    pub state: UsersState,
    pub actions: UseUsersActions,
}

#[derive(Clone, PartialEq)]
pub struct UseUsersActions {
    pub list: Callback<()>,
    pub get: Callback<()>,
    pub create: Callback<()>,
    pub update: Callback<()>,
    pub delete: Callback<()>,
    pub on_lookup_id_change: Callback<Event>,
    pub on_create_name_change: Callback<Event>,
    pub on_create_email_change: Callback<Event>,
    pub on_update_id_change: Callback<Event>,
    pub on_update_name_change: Callback<Event>,
    pub on_update_email_change: Callback<Event>,
    pub on_delete_id_change: Callback<Event>,
}

/// User CRUD actions. Every action follows the same template: validate
/// locally (no call goes out on failure), show pending text, issue one
/// request with the bearer token when present, and render the
/// normalized result. A 401/403 is routed to `on_auth_failure` instead
/// of being rendered here.
#[hook]
pub fn use_users(
    api_client: &ApiClient,
    token: Option<String>,
    on_auth_failure: &Callback<()>,
    output: &Callback<OutputState>,
) -> UseUsersResult {
    let lookup_id = use_state(String::new);
    let create_name = use_state(String::new);
    let create_email = use_state(String::new);
    let update_id = use_state(String::new);
    let update_name = use_state(String::new);
    let update_email = use_state(String::new);
    let delete_id = use_state(String::new);
    let busy = use_state(|| false);

    let list = {
        let api_client = api_client.clone();
        let output = output.clone();
        let on_auth_failure = on_auth_failure.clone();
        let busy = busy.clone();

        use_callback(token.clone(), move |_: (), token| {
            output.emit(OutputState::Pending("Loading users...".to_string()));

            let api_client = api_client.clone();
            let output = output.clone();
            let on_auth_failure = on_auth_failure.clone();
            let busy = busy.clone();
            let token = token.clone();
            spawn_local(async move {
                busy.set(true);
                match api_client.list_users(token.as_deref()).await {
                    Ok(response) => {
                        if response.is_auth_failure() {
                            on_auth_failure.emit(());
                        } else if response.ok {
                            let message = response.json().and_then(|v| v.as_array()).map(|users| {
                                if users.is_empty() {
                                    "No users found".to_string()
                                } else {
                                    format!("Fetched {} users", users.len())
                                }
                            });
                            output.emit(OutputState::Response { message, response });
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

    let get = {
        let api_client = api_client.clone();
        let lookup_id = lookup_id.clone();
        let output = output.clone();
        let on_auth_failure = on_auth_failure.clone();
        let busy = busy.clone();

        use_callback(token.clone(), move |_: (), token| {
            let id = match parse_id(&lookup_id, "User ID") {
                Ok(id) => id,
                Err(e) => {
                    output.emit(OutputState::Error(e.to_string()));
                    return;
                }
            };
            output.emit(OutputState::Pending(format!("Loading user {}...", id)));

            let api_client = api_client.clone();
            let output = output.clone();
            let on_auth_failure = on_auth_failure.clone();
            let busy = busy.clone();
            let token = token.clone();
            spawn_local(async move {
                busy.set(true);
                match api_client.get_user(id, token.as_deref()).await {
                    Ok(response) => {
                        if response.is_auth_failure() {
                            on_auth_failure.emit(());
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

    let create = {
        let api_client = api_client.clone();
        let create_name = create_name.clone();
        let create_email = create_email.clone();
        let output = output.clone();
        let on_auth_failure = on_auth_failure.clone();
        let busy = busy.clone();

        use_callback(token.clone(), move |_: (), token| {
            let request = match CreateUserRequest::from_form(&create_name, &create_email) {
                Ok(request) => request,
                Err(e) => {
                    output.emit(OutputState::Error(e.to_string()));
                    return;
                }
            };
            output.emit(OutputState::Pending("Creating user...".to_string()));

            let api_client = api_client.clone();
            let create_name = create_name.clone();
            let create_email = create_email.clone();
            let output = output.clone();
            let on_auth_failure = on_auth_failure.clone();
            let busy = busy.clone();
            let token = token.clone();
            spawn_local(async move {
                busy.set(true);
                match api_client.create_user(&request, token.as_deref()).await {
                    Ok(response) => {
                        if response.is_auth_failure() {
                            on_auth_failure.emit(());
                        } else if response.ok {
                            create_name.set(String::new());
                            create_email.set(String::new());
                            output.emit(OutputState::Response {
                                message: Some("User created successfully!".to_string()),
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

    let update = {
        let api_client = api_client.clone();
        let update_id = update_id.clone();
        let update_name = update_name.clone();
        let update_email = update_email.clone();
        let output = output.clone();
        let on_auth_failure = on_auth_failure.clone();
        let busy = busy.clone();

        use_callback(token.clone(), move |_: (), token| {
            let id = match parse_id(&update_id, "User ID") {
                Ok(id) => id,
                Err(e) => {
                    output.emit(OutputState::Error(e.to_string()));
                    return;
                }
            };
            let request = match UpdateUserRequest::from_form(&update_name, &update_email) {
                Ok(request) => request,
                Err(e) => {
                    output.emit(OutputState::Error(e.to_string()));
                    return;
                }
            };
            output.emit(OutputState::Pending(format!("Updating user {}...", id)));

            let api_client = api_client.clone();
            let update_id = update_id.clone();
            let update_name = update_name.clone();
            let update_email = update_email.clone();
            let output = output.clone();
            let on_auth_failure = on_auth_failure.clone();
            let busy = busy.clone();
            let token = token.clone();
            spawn_local(async move {
                busy.set(true);
                match api_client.update_user(id, &request, token.as_deref()).await {
                    Ok(response) => {
                        if response.is_auth_failure() {
                            on_auth_failure.emit(());
                        } else if response.ok {
                            update_id.set(String::new());
                            update_name.set(String::new());
                            update_email.set(String::new());
                            output.emit(OutputState::Response {
                                message: Some("User updated successfully!".to_string()),
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

    let delete = {
        let api_client = api_client.clone();
        let delete_id = delete_id.clone();
        let output = output.clone();
        let on_auth_failure = on_auth_failure.clone();
        let busy = busy.clone();

        use_callback(token.clone(), move |_: (), token| {
            let id = match parse_id(&delete_id, "User ID") {
                Ok(id) => id,
                Err(e) => {
                    output.emit(OutputState::Error(e.to_string()));
                    return;
                }
            };
            if !gloo::dialogs::confirm(&format!(
                "Are you sure you want to delete user with ID {}?",
                id
            )) {
                return;
            }
            output.emit(OutputState::Pending(format!("Deleting user {}...", id)));

            let api_client = api_client.clone();
            let delete_id = delete_id.clone();
            let output = output.clone();
            let on_auth_failure = on_auth_failure.clone();
            let busy = busy.clone();
            let token = token.clone();
            spawn_local(async move {
                busy.set(true);
                match api_client.delete_user(id, token.as_deref()).await {
                    Ok(response) => {
                        if response.is_auth_failure() {
                            on_auth_failure.emit(());
                        } else if response.ok {
                            delete_id.set(String::new());
                            output.emit(OutputState::Notice(format!(
                                "User with ID {} deleted successfully",
                                id
                            )));
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

    let on_lookup_id_change = {
        let lookup_id = lookup_id.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            lookup_id.set(input.value());
        })
    };

    let on_create_name_change = {
        let create_name = create_name.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            create_name.set(input.value());
        })
    };

    let on_create_email_change = {
        let create_email = create_email.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            create_email.set(input.value());
        })
    };

    let on_update_id_change = {
        let update_id = update_id.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update_id.set(input.value());
        })
    };

    let on_update_name_change = {
        let update_name = update_name.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update_name.set(input.value());
        })
    };

    let on_update_email_change = {
        let update_email = update_email.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update_email.set(input.value());
        })
    };

    let on_delete_id_change = {
        let delete_id = delete_id.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            delete_id.set(input.value());
        })
    };

    let state = UsersState {
        lookup_id: (*lookup_id).clone(),
        create_name: (*create_name).clone(),
        create_email: (*create_email).clone(),
        update_id: (*update_id).clone(),
        update_name: (*update_name).clone(),
        update_email: (*update_email).clone(),
        delete_id: (*delete_id).clone(),
        busy: *busy,
    };

    let actions = UseUsersActions {
        list,
        get,
        create,
        update,
        delete,
        on_lookup_id_change,
        on_create_name_change,
        on_create_email_change,
        on_update_id_change,
        on_update_name_change,
        on_update_email_change,
        on_delete_id_change,
    };

    UseUsersResult { state, actions }
}
