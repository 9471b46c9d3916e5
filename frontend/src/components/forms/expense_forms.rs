use yew::prelude::*;

use crate::hooks::use_expenses::{ExpensesState, UseExpensesActions};

#[derive(Properties, PartialEq)]
pub struct ExpensesPanelProps {
    pub state: ExpensesState,
    pub actions: UseExpensesActions,
}

/// All expense operations on one panel, one small form per action.
#[function_component(ExpensesPanel)]
pub fn expenses_panel(props: &ExpensesPanelProps) -> Html {
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
                <h3>{"All Expenses"}</h3>
                <button
                    class="btn btn-primary"
                    onclick={click(&props.actions.list)}
                    disabled={props.state.busy}
                >
                    {"Fetch All Expenses"}
                </button>
            </section>

            <section class="panel-section">
                <h3>{"Get Expense by ID"}</h3>
                <form onsubmit={submit(&props.actions.get)}>
                    <div class="form-group">
                        <label for="expense-lookup-id">{"Expense ID"}</label>
                        <input
                            type="number"
                            id="expense-lookup-id"
                            value={props.state.lookup_id.clone()}
                            onchange={props.actions.on_lookup_id_change.clone()}
                            disabled={props.state.busy}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={props.state.busy}>
                        {"Fetch Expense"}
                    </button>
                </form>
            </section>

            <section class="panel-section">
                <h3>{"Expenses for User"}</h3>
                <form onsubmit={submit(&props.actions.get_for_user)}>
                    <div class="form-group">
                        <label for="expense-user-lookup-id">{"User ID"}</label>
                        <input
                            type="number"
                            id="expense-user-lookup-id"
                            value={props.state.user_lookup_id.clone()}
                            onchange={props.actions.on_user_lookup_id_change.clone()}
                            disabled={props.state.busy}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={props.state.busy}>
                        {"Fetch User Expenses"}
                    </button>
                </form>
            </section>

            <section class="panel-section">
                <h3>{"Create Expense"}</h3>
                <form onsubmit={submit(&props.actions.create)}>
                    <div class="form-group">
                        <label for="expense-create-category">{"Category"}</label>
                        <input
                            type="text"
                            id="expense-create-category"
                            placeholder="Food"
                            value={props.state.create_category.clone()}
                            onchange={props.actions.on_create_category_change.clone()}
                            disabled={props.state.busy}
                        />
                    </div>
                    <div class="form-group">
                        <label for="expense-create-sub-category">{"Sub Category"}</label>
                        <input
                            type="text"
                            id="expense-create-sub-category"
                            placeholder="Lunch"
                            value={props.state.create_sub_category.clone()}
                            onchange={props.actions.on_create_sub_category_change.clone()}
                            disabled={props.state.busy}
                        />
                    </div>
                    <div class="form-group">
                        <label for="expense-create-description">{"Description (optional)"}</label>
                        <input
                            type="text"
                            id="expense-create-description"
                            value={props.state.create_description.clone()}
                            onchange={props.actions.on_create_description_change.clone()}
                            disabled={props.state.busy}
                        />
                    </div>
                    <div class="form-group">
                        <label for="expense-create-amount">{"Amount"}</label>
                        <input
                            type="number"
                            id="expense-create-amount"
                            placeholder="12.50"
                            step="0.01"
                            min="0.01"
                            value={props.state.create_amount.clone()}
                            onchange={props.actions.on_create_amount_change.clone()}
                            disabled={props.state.busy}
                        />
                    </div>
                    <div class="form-group">
                        <label for="expense-create-date">{"Date"}</label>
                        <input
                            type="date"
                            id="expense-create-date"
                            value={props.state.create_date.clone()}
                            onchange={props.actions.on_create_date_change.clone()}
                            disabled={props.state.busy}
                        />
                    </div>
                    <div class="form-group">
                        <label for="expense-create-user-id">{"User ID"}</label>
                        <input
                            type="number"
                            id="expense-create-user-id"
                            value={props.state.create_user_id.clone()}
                            onchange={props.actions.on_create_user_id_change.clone()}
                            disabled={props.state.busy}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={props.state.busy}>
                        {"Create Expense"}
                    </button>
                </form>
            </section>

            <section class="panel-section">
                <h3>{"Update Expense"}</h3>
                <p class="hint">{"Fill only the fields you want to change."}</p>
                <form onsubmit={submit(&props.actions.update)}>
                    <div class="form-group">
                        <label for="expense-update-id">{"Expense ID"}</label>
                        <input
                            type="number"
                            id="expense-update-id"
                            value={props.state.update_id.clone()}
                            onchange={props.actions.on_update_id_change.clone()}
                            disabled={props.state.busy}
                        />
                    </div>
                    <div class="form-group">
                        <label for="expense-update-category">{"Category"}</label>
                        <input
                            type="text"
                            id="expense-update-category"
                            value={props.state.update_category.clone()}
                            onchange={props.actions.on_update_category_change.clone()}
                            disabled={props.state.busy}
                        />
                    </div>
                    <div class="form-group">
                        <label for="expense-update-sub-category">{"Sub Category"}</label>
                        <input
                            type="text"
                            id="expense-update-sub-category"
                            value={props.state.update_sub_category.clone()}
                            onchange={props.actions.on_update_sub_category_change.clone()}
                            disabled={props.state.busy}
                        />
                    </div>
                    <div class="form-group">
                        <label for="expense-update-description">{"Description"}</label>
                        <input
                            type="text"
                            id="expense-update-description"
                            value={props.state.update_description.clone()}
                            onchange={props.actions.on_update_description_change.clone()}
                            disabled={props.state.busy}
                        />
                    </div>
                    <div class="form-group">
                        <label for="expense-update-amount">{"Amount"}</label>
                        <input
                            type="number"
                            id="expense-update-amount"
                            step="0.01"
                            min="0.01"
                            value={props.state.update_amount.clone()}
                            onchange={props.actions.on_update_amount_change.clone()}
                            disabled={props.state.busy}
                        />
                    </div>
                    <div class="form-group">
                        <label for="expense-update-date">{"Date"}</label>
                        <input
                            type="date"
                            id="expense-update-date"
                            value={props.state.update_date.clone()}
                            onchange={props.actions.on_update_date_change.clone()}
                            disabled={props.state.busy}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={props.state.busy}>
                        {"Update Expense"}
                    </button>
                </form>
            </section>

            <section class="panel-section">
                <h3>{"Delete Expense"}</h3>
                <form onsubmit={submit(&props.actions.delete)}>
                    <div class="form-group">
                        <label for="expense-delete-id">{"Expense ID"}</label>
                        <input
                            type="number"
                            id="expense-delete-id"
                            value={props.state.delete_id.clone()}
                            onchange={props.actions.on_delete_id_change.clone()}
                            disabled={props.state.busy}
                        />
                    </div>
                    <button type="submit" class="btn btn-danger" disabled={props.state.busy}>
                        {"Delete Expense"}
                    </button>
                </form>
            </section>
        </div>
    }
}
