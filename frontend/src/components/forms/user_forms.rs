use yew::prelude::*;

use crate::hooks::use_users::{UseUsersActions, UsersState};

#[derive(Properties, PartialEq)]
pub struct UsersPanelProps {
    pub state: UsersState,
    pub actions: UseUsersActions,
}

/// All user operations on one panel, one small form per action.
#[function_component(UsersPanel)]
pub fn users_panel(props: &UsersPanelProps) -> Html {
    let submit = |action: &Callback<()>| {
        let action = action.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            action.emit(());
        })
    };
    let click = |action: &Callback<()>| {
        let action = action.clone();
        Callback::from(move |_: MouseEvent| action.emit(()))
    };

    html! {
        <div class="panel">
            <section class="panel-section">
                <h3>{"All Users"}</h3>
                <button
                    class="btn btn-primary"
                    onclick={click(&props.actions.list)}
                    disabled={props.state.busy}
                >
                    {"Fetch All Users"}
                </button>
            </section>

            <section class="panel-section">
                <h3>{"Get User by ID"}</h3>
                <form onsubmit={submit(&props.actions.get)}>
                    <div class="form-group">
                        <label for="user-lookup-id">{"User ID"}</label>
                        <input
                            type="number"
                            id="user-lookup-id"
                            value={props.state.lookup_id.clone()}
                            onchange={props.actions.on_lookup_id_change.clone()}
                            disabled={props.state.busy}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={props.state.busy}>
                        {"Fetch User"}
                    </button>
                </form>
            </section>

            <section class="panel-section">
                <h3>{"Create User"}</h3>
                <form onsubmit={submit(&props.actions.create)}>
                    <div class="form-group">
                        <label for="user-create-name">{"Name"}</label>
                        <input
                            type="text"
                            id="user-create-name"
                            placeholder="Ada Lovelace"
                            value={props.state.create_name.clone()}
                            onchange={props.actions.on_create_name_change.clone()}
                            disabled={props.state.busy}
                        />
                    </div>
                    <div class="form-group">
                        <label for="user-create-email">{"Email"}</label>
                        <input
                            type="email"
                            id="user-create-email"
                            placeholder="ada@example.com"
                            value={props.state.create_email.clone()}
                            onchange={props.actions.on_create_email_change.clone()}
                            disabled={props.state.busy}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={props.state.busy}>
                        {"Create User"}
                    </button>
                </form>
            </section>

            <section class="panel-section">
                <h3>{"Update User"}</h3>
                <p class="hint">{"Fill only the fields you want to change."}</p>
                <form onsubmit={submit(&props.actions.update)}>
                    <div class="form-group">
                        <label for="user-update-id">{"User ID"}</label>
                        <input
                            type="number"
                            id="user-update-id"
                            value={props.state.update_id.clone()}
                            onchange={props.actions.on_update_id_change.clone()}
                            disabled={props.state.busy}
                        />
                    </div>
                    <div class="form-group">
                        <label for="user-update-name">{"Name"}</label>
                        <input
                            type="text"
                            id="user-update-name"
                            value={props.state.update_name.clone()}
                            onchange={props.actions.on_update_name_change.clone()}
                            disabled={props.state.busy}
                        />
                    </div>
                    <div class="form-group">
                        <label for="user-update-email">{"Email"}</label>
                        <input
                            type="email"
                            id="user-update-email"
                            value={props.state.update_email.clone()}
                            onchange={props.actions.on_update_email_change.clone()}
                            disabled={props.state.busy}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={props.state.busy}>
                        {"Update User"}
                    </button>
                </form>
            </section>

            <section class="panel-section">
                <h3>{"Delete User"}</h3>
                <form onsubmit={submit(&props.actions.delete)}>
                    <div class="form-group">
                        <label for="user-delete-id">{"User ID"}</label>
                        <input
                            type="number"
                            id="user-delete-id"
                            value={props.state.delete_id.clone()}
                            onchange={props.actions.on_delete_id_change.clone()}
                            disabled={props.state.busy}
                        />
                    </div>
                    <button type="submit" class="btn btn-danger" disabled={props.state.busy}>
                        {"Delete User"}
                    </button>
                </form>
            </section>
        </div>
    }
}
