use shared::{parse_id, CreateExpenseRequest, UpdateExpenseRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::output_panel::OutputState;
use crate::services::api::ApiClient;

/// Form state for the expense panel
#[derive(Clone, PartialEq)]
pub struct ExpensesState {
    pub lookup_id: String,
    pub user_lookup_id: String,
    pub create_category: String,
    pub create_sub_category: String,
    pub create_description: String,
    pub create_amount: String,
    pub create_date: String,
    pub create_user_id: String,
    pub update_id: String,
    pub update_category: String,
    pub update_sub_category: String,
    pub update_description: String,
    pub update_amount: String,
    pub update_date: String,
    pub delete_id: String,
    pub busy: bool,
}

pub struct UseExpensesResult {
    pub state: ExpensesState,
    pub actions: UseExpensesActions,
}

#[derive(Clone, PartialEq)]
pub struct UseExpensesActions {
    pub list: Callback<()>,
    pub get: Callback<()>,
    pub get_for_user: Callback<()>,
    pub create: Callback<()>,
    pub update: Callback<()>,
    pub delete: Callback<()>,
    pub on_lookup_id_change: Callback<Event>,
    pub on_user_lookup_id_change: Callback<Event>,
    pub on_create_category_change: Callback<Event>,
    pub on_create_sub_category_change: Callback<Event>,
    pub on_create_description_change: Callback<Event>,
    pub on_create_amount_change: Callback<Event>,
    pub on_create_date_change: Callback<Event>,
    pub on_create_user_id_change: Callback<Event>,
    pub on_update_id_change: Callback<Event>,
    pub on_update_category_change: Callback<Event>,
    pub on_update_sub_category_change: Callback<Event>,
    pub on_update_description_change: Callback<Event>,
    pub on_update_amount_change: Callback<Event>,
    pub on_update_date_change: Callback<Event>,
    pub on_delete_id_change: Callback<Event>,
}

/// Expense CRUD actions, same template as the user hook: local
/// validation short-circuits before any call, a pending message goes up
/// first, one request goes out with the bearer token when present, and
/// 401/403 is routed to `on_auth_failure`.
#[hook]
pub fn use_expenses(
    api_client: &ApiClient,
    token: Option<String>,
    on_auth_failure: &Callback<()>,
    output: &Callback<OutputState>,
) -> UseExpensesResult {
    let lookup_id = use_state(String::new);
    let user_lookup_id = use_state(String::new);
    let create_category = use_state(String::new);
    let create_sub_category = use_state(String::new);
    let create_description = use_state(String::new);
    let create_amount = use_state(String::new);
    let create_date = use_state(String::new);
    let create_user_id = use_state(String::new);
    let update_id = use_state(String::new);
    let update_category = use_state(String::new);
    let update_sub_category = use_state(String::new);
    let update_description = use_state(String::new);
    let update_amount = use_state(String::new);
    let update_date = use_state(String::new);
    let delete_id = use_state(String::new);
    let busy = use_state(|| false);

    let list = {
        let api_client = api_client.clone();
        let output = output.clone();
        let on_auth_failure = on_auth_failure.clone();
        let busy = busy.clone();

        use_callback(token.clone(), move |_: (), token| {
            output.emit(OutputState::Pending("Loading expenses...".to_string()));

            let api_client = api_client.clone();
            let output = output.clone();
            let on_auth_failure = on_auth_failure.clone();
            let busy = busy.clone();
            let token = token.clone();
            spawn_local(async move {
                busy.set(true);
                match api_client.list_expenses(token.as_deref()).await {
                    Ok(response) => {
                        if response.is_auth_failure() {
                            on_auth_failure.emit(());
                        } else if response.ok {
                            let message =
                                response.json().and_then(|v| v.as_array()).map(|expenses| {
                                    if expenses.is_empty() {
                                        "No expenses found".to_string()
                                    } else {
                                        format!("Fetched {} expenses", expenses.len())
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
            let id = match parse_id(&lookup_id, "Expense ID") {
                Ok(id) => id,
                Err(e) => {
                    output.emit(OutputState::Error(e.to_string()));
                    return;
                }
            };
            output.emit(OutputState::Pending(format!("Loading expense {}...", id)));

            let api_client = api_client.clone();
            let output = output.clone();
            let on_auth_failure = on_auth_failure.clone();
            let busy = busy.clone();
            let token = token.clone();
            spawn_local(async move {
                busy.set(true);
                match api_client.get_expense(id, token.as_deref()).await {
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

    let get_for_user = {
        let api_client = api_client.clone();
        let user_lookup_id = user_lookup_id.clone();
        let output = output.clone();
        let on_auth_failure = on_auth_failure.clone();
        let busy = busy.clone();

        use_callback(token.clone(), move |_: (), token| {
            let user_id = match parse_id(&user_lookup_id, "User ID") {
                Ok(id) => id,
                Err(e) => {
                    output.emit(OutputState::Error(e.to_string()));
                    return;
                }
            };
            output.emit(OutputState::Pending(format!(
                "Loading expenses for user {}...",
                user_id
            )));

            let api_client = api_client.clone();
            let output = output.clone();
            let on_auth_failure = on_auth_failure.clone();
            let busy = busy.clone();
            let token = token.clone();
            spawn_local(async move {
                busy.set(true);
                match api_client.expenses_for_user(user_id, token.as_deref()).await {
                    Ok(response) => {
                        if response.is_auth_failure() {
                            on_auth_failure.emit(());
                        } else if response.ok {
                            let message =
                                response.json().and_then(|v| v.as_array()).map(|expenses| {
                                    if expenses.is_empty() {
                                        format!("No expenses found for user {}", user_id)
                                    } else {
                                        format!(
                                            "Fetched {} expenses for user {}",
                                            expenses.len(),
                                            user_id
                                        )
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

    let create = {
        let api_client = api_client.clone();
        let create_category = create_category.clone();
        let create_sub_category = create_sub_category.clone();
        let create_description = create_description.clone();
        let create_amount = create_amount.clone();
        let create_date = create_date.clone();
        let create_user_id = create_user_id.clone();
        let output = output.clone();
        let on_auth_failure = on_auth_failure.clone();
        let busy = busy.clone();

        use_callback(token.clone(), move |_: (), token| {
            let request = match CreateExpenseRequest::from_form(
                &create_category,
                &create_sub_category,
                &create_description,
                &create_amount,
                &create_date,
                &create_user_id,
            ) {
                Ok(request) => request,
                Err(e) => {
                    output.emit(OutputState::Error(e.to_string()));
                    return;
                }
            };
            output.emit(OutputState::Pending("Creating expense...".to_string()));

            let api_client = api_client.clone();
            let create_category = create_category.clone();
            let create_sub_category = create_sub_category.clone();
            let create_description = create_description.clone();
            let create_amount = create_amount.clone();
            let create_date = create_date.clone();
            let create_user_id = create_user_id.clone();
            let output = output.clone();
            let on_auth_failure = on_auth_failure.clone();
            let busy = busy.clone();
            let token = token.clone();
            spawn_local(async move {
                busy.set(true);
                match api_client.create_expense(&request, token.as_deref()).await {
                    Ok(response) => {
                        if response.is_auth_failure() {
                            on_auth_failure.emit(());
                        } else if response.ok {
                            create_category.set(String::new());
                            create_sub_category.set(String::new());
                            create_description.set(String::new());
                            create_amount.set(String::new());
                            create_date.set(String::new());
                            create_user_id.set(String::new());
                            output.emit(OutputState::Response {
                                message: Some("Expense created successfully!".to_string()),
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
        let update_category = update_category.clone();
        let update_sub_category = update_sub_category.clone();
        let update_description = update_description.clone();
        let update_amount = update_amount.clone();
        let update_date = update_date.clone();
        let output = output.clone();
        let on_auth_failure = on_auth_failure.clone();
        let busy = busy.clone();

        use_callback(token.clone(), move |_: (), token| {
            let id = match parse_id(&update_id, "Expense ID") {
                Ok(id) => id,
                Err(e) => {
                    output.emit(OutputState::Error(e.to_string()));
                    return;
                }
            };
            let request = match UpdateExpenseRequest::from_form(
                &update_category,
                &update_sub_category,
                &update_description,
                &update_amount,
                &update_date,
            ) {
                Ok(request) => request,
                Err(e) => {
                    output.emit(OutputState::Error(e.to_string()));
                    return;
                }
            };
            output.emit(OutputState::Pending(format!("Updating expense {}...", id)));

            let api_client = api_client.clone();
            let update_id = update_id.clone();
            let update_category = update_category.clone();
            let update_sub_category = update_sub_category.clone();
            let update_description = update_description.clone();
            let update_amount = update_amount.clone();
            let update_date = update_date.clone();
            let output = output.clone();
            let on_auth_failure = on_auth_failure.clone();
            let busy = busy.clone();
            let token = token.clone();
            spawn_local(async move {
                busy.set(true);
                match api_client
                    .update_expense(id, &request, token.as_deref())
                    .await
                {
                    Ok(response) => {
                        if response.is_auth_failure() {
                            on_auth_failure.emit(());
                        } else if response.ok {
                            update_id.set(String::new());
                            update_category.set(String::new());
                            update_sub_category.set(String::new());
                            update_description.set(String::new());
                            update_amount.set(String::new());
                            update_date.set(String::new());
                            output.emit(OutputState::Response {
                                message: Some("Expense updated successfully!".to_string()),
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
            let id = match parse_id(&delete_id, "Expense ID") {
                Ok(id) => id,
                Err(e) => {
                    output.emit(OutputState::Error(e.to_string()));
                    return;
                }
            };
            if !gloo::dialogs::confirm(&format!(
                "Are you sure you want to delete expense with ID {}?",
                id
            )) {
                return;
            }
            output.emit(OutputState::Pending(format!("Deleting expense {}...", id)));

            let api_client = api_client.clone();
            let delete_id = delete_id.clone();
            let output = output.clone();
            let on_auth_failure = on_auth_failure.clone();
            let busy = busy.clone();
            let token = token.clone();
            spawn_local(async move {
                busy.set(true);
                match api_client.delete_expense(id, token.as_deref()).await {
                    Ok(response) => {
                        if response.is_auth_failure() {
                            on_auth_failure.emit(());
                        } else if response.ok {
                            delete_id.set(String::new());
                            output.emit(OutputState::Notice(format!(
                                "Expense with ID {} deleted successfully",
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

    let on_user_lookup_id_change = {
        let user_lookup_id = user_lookup_id.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            user_lookup_id.set(input.value());
        })
    };

    let on_create_category_change = {
        let create_category = create_category.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            create_category.set(input.value());
        })
    };

    let on_create_sub_category_change = {
        let create_sub_category = create_sub_category.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            create_sub_category.set(input.value());
        })
    };

    let on_create_description_change = {
        let create_description = create_description.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            create_description.set(input.value());
        })
    };

    let on_create_amount_change = {
        let create_amount = create_amount.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            create_amount.set(input.value());
        })
    };

    let on_create_date_change = {
        let create_date = create_date.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            create_date.set(input.value());
        })
    };

    let on_create_user_id_change = {
        let create_user_id = create_user_id.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            create_user_id.set(input.value());
        })
    };

    let on_update_id_change = {
        let update_id = update_id.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update_id.set(input.value());
        })
    };

    let on_update_category_change = {
        let update_category = update_category.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update_category.set(input.value());
        })
    };

    let on_update_sub_category_change = {
        let update_sub_category = update_sub_category.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update_sub_category.set(input.value());
        })
    };

    let on_update_description_change = {
        let update_description = update_description.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update_description.set(input.value());
        })
    };

    let on_update_amount_change = {
        let update_amount = update_amount.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update_amount.set(input.value());
        })
    };

    let on_update_date_change = {
        let update_date = update_date.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update_date.set(input.value());
        })
    };

    let on_delete_id_change = {
        let delete_id = delete_id.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            delete_id.set(input.value());
        })
    };

    let state = ExpensesState {
        lookup_id: (*lookup_id).clone(),
        user_lookup_id: (*user_lookup_id).clone(),
        create_category: (*create_category).clone(),
        create_sub_category: (*create_sub_category).clone(),
        create_description: (*create_description).clone(),
        create_amount: (*create_amount).clone(),
        create_date: (*create_date).clone(),
        create_user_id: (*create_user_id).clone(),
        update_id: (*update_id).clone(),
        update_category: (*update_category).clone(),
        update_sub_category: (*update_sub_category).clone(),
        update_description: (*update_description).clone(),
        update_amount: (*update_amount).clone(),
        update_date: (*update_date).clone(),
        delete_id: (*delete_id).clone(),
        busy: *busy,
    };

    let actions = UseExpensesActions {
        list,
        get,
        get_for_user,
        create,
        update,
        delete,
        on_lookup_id_change,
        on_user_lookup_id_change,
        on_create_category_change,
        on_create_sub_category_change,
        on_create_description_change,
        on_create_amount_change,
        on_create_date_change,
        on_create_user_id_change,
        on_update_id_change,
        on_update_category_change,
        on_update_sub_category_change,
        on_update_description_change,
        on_update_amount_change,
        on_update_date_change,
        on_delete_id_change,
    };

    UseExpensesResult { state, actions }
}
