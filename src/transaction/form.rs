use maud::{Markup, html};
use time::Date;

use crate::{
    category::categories_for,
    endpoints,
    html::{
        FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE,
    },
    transaction::TransactionKind,
};

pub struct TransactionFormDefaults {
    pub kind: TransactionKind,
    pub date: Date,
}

pub fn transaction_form_fields(defaults: &TransactionFormDefaults) -> Markup {
    let is_expense = matches!(defaults.kind, TransactionKind::Expense);

    html! {
        fieldset class="space-y-2"
        {
            legend class=(FORM_LABEL_STYLE) { "Transaction type" }

            div class=(FORM_RADIO_GROUP_STYLE)
            {
                div class="flex items-center gap-3"
                {
                    input
                        name="type_"
                        id="transaction-type-expense"
                        type="radio"
                        value="expense"
                        checked[is_expense]
                        required
                        tabindex="0"
                        hx-get=(endpoints::CATEGORY_OPTIONS)
                        hx-target="#category-select"
                        hx-swap="outerHTML"
                        class=(FORM_RADIO_INPUT_STYLE);

                    label
                        for="transaction-type-expense"
                        class=(FORM_RADIO_LABEL_STYLE)
                    {
                        "Expense"
                    }
                }

                div class="flex items-center gap-3"
                {
                    input
                        name="type_"
                        id="transaction-type-income"
                        type="radio"
                        value="income"
                        checked[!is_expense]
                        required
                        tabindex="0"
                        hx-get=(endpoints::CATEGORY_OPTIONS)
                        hx-target="#category-select"
                        hx-swap="outerHTML"
                        class=(FORM_RADIO_INPUT_STYLE);

                    label
                        for="transaction-type-income"
                        class=(FORM_RADIO_LABEL_STYLE)
                    {
                        "Income"
                    }
                }
            }
        }

        div
        {
            label
                for="amount"
                class=(FORM_LABEL_STYLE)
            {
                "Amount"
            }

            div class="input-wrapper w-full"
            {
                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    placeholder="0.01"
                    min="0.01"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }

        div
        {
            label
                for="date"
                class=(FORM_LABEL_STYLE)
            {
                "Date"
            }

            input
                name="date"
                id="date"
                type="date"
                value=(defaults.date)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="name"
                class=(FORM_LABEL_STYLE)
            {
                "Name"
            }

            input
                name="name"
                id="name"
                type="text"
                placeholder="What was this for?"
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="category"
                class=(FORM_LABEL_STYLE)
            {
                "Category"
            }

            (category_select(defaults.kind))
        }
    }
}

/// The category dropdown for transactions of `kind`.
///
/// Rendered on its own as a partial when the transaction type radio buttons
/// change, so the dropdown always matches the selected type.
pub fn category_select(kind: TransactionKind) -> Markup {
    html! {
        select
            name="category"
            id="category-select"
            required
            class=(FORM_TEXT_INPUT_STYLE)
        {
            @for category in categories_for(kind) {
                option value=(category.key) { (category.icon) " " (category.name) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};
    use time::OffsetDateTime;

    use super::{TransactionFormDefaults, category_select, transaction_form_fields};
    use crate::{category::categories_for, transaction::TransactionKind};

    #[test]
    fn transaction_form_fields_checks_selected_type() {
        let cases = [
            (TransactionKind::Expense, "expense"),
            (TransactionKind::Income, "income"),
        ];

        for (kind, expected) in cases {
            let html = render_fields(kind);
            assert_checked_value(&html, expected);
        }
    }

    #[test]
    fn category_select_lists_categories_for_kind() {
        for kind in [TransactionKind::Expense, TransactionKind::Income] {
            let markup = category_select(kind);
            let html = Html::parse_fragment(&markup.into_string());

            let option_selector = Selector::parse("option").unwrap();
            let values: Vec<&str> = html
                .select(&option_selector)
                .map(|option| option.value().attr("value").unwrap_or_default())
                .collect();

            let expected: Vec<&str> = categories_for(kind)
                .iter()
                .map(|category| category.key)
                .collect();
            assert_eq!(values, expected);
        }
    }

    fn render_fields(kind: TransactionKind) -> Html {
        let fields = transaction_form_fields(&TransactionFormDefaults {
            kind,
            date: OffsetDateTime::now_utc().date(),
        });
        let markup = maud::html! { form { (fields) } };
        Html::parse_document(&markup.into_string())
    }

    fn assert_checked_value(document: &Html, expected: &str) {
        let selector = Selector::parse("input[type=radio][name=type_]").unwrap();
        let inputs = document.select(&selector).collect::<Vec<_>>();
        assert_eq!(
            inputs.len(),
            2,
            "want 2 transaction type inputs, got {}",
            inputs.len()
        );

        let checked = inputs
            .iter()
            .find(|input| input.value().attr("checked").is_some())
            .and_then(|input| input.value().attr("value"));
        assert_eq!(
            checked,
            Some(expected),
            "want checked transaction type to be {expected}, got {checked:?}"
        );
    }
}
