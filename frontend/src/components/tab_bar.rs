use yew::prelude::*;

/// Resource panels available in the authenticated view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Users,
    Expenses,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Users, Tab::Expenses];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Users => "Users",
            Tab::Expenses => "Expenses",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <nav class="tabs">
            {for Tab::ALL.iter().map(|tab| {
                let tab = *tab;
                let class = if tab == props.active { "tab active" } else { "tab" };
                let on_select = props.on_select.clone();
                html! {
                    <button
                        class={class}
                        onclick={Callback::from(move |_| on_select.emit(tab))}
                    >
                        {tab.label()}
                    </button>
                }
            })}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_labels() {
        assert_eq!(Tab::Users.label(), "Users");
        assert_eq!(Tab::Expenses.label(), "Expenses");
        assert_eq!(Tab::ALL.len(), 2);
    }
}
