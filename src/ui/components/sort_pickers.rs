use iced::widget::{pick_list, row, text};
use iced::{Alignment, Element};
use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result};

use crate::domain::entities::query::{SortField, SortOrder};
use crate::tr;
use crate::ui::messages::videos_message::VideosMessage;

/// A picker entry showing a translated label for a domain value.
#[derive(Clone, Debug)]
pub struct Choice<T> {
    pub value: T,
    pub label: String,
}

impl<T: PartialEq> PartialEq for Choice<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Display for Choice<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.label)
    }
}

fn sort_field_choice(value: SortField, translations: &HashMap<String, String>) -> Choice<SortField> {
    Choice {
        value,
        label: tr!(translations, value.translation_key()),
    }
}

fn sort_order_choice(value: SortOrder, translations: &HashMap<String, String>) -> Choice<SortOrder> {
    Choice {
        value,
        label: tr!(translations, value.translation_key()),
    }
}

pub fn sort_pickers<'a>(
    sort_field: SortField,
    sort_order: SortOrder,
    translations: &HashMap<String, String>,
) -> Element<'a, VideosMessage> {
    let fields: Vec<Choice<SortField>> = SortField::ALL
        .into_iter()
        .map(|field| sort_field_choice(field, translations))
        .collect();
    let orders: Vec<Choice<SortOrder>> = SortOrder::ALL
        .into_iter()
        .map(|order| sort_order_choice(order, translations))
        .collect();

    let sort_by = pick_list(
        fields,
        Some(sort_field_choice(sort_field, translations)),
        |choice: Choice<SortField>| VideosMessage::SortFieldSelected(choice.value),
    )
    .padding(8);

    let order_by = pick_list(
        orders,
        Some(sort_order_choice(sort_order, translations)),
        |choice: Choice<SortOrder>| VideosMessage::SortOrderSelected(choice.value),
    )
    .padding(8);

    row![
        text(tr!(translations, "sort_by")),
        sort_by,
        text(tr!(translations, "sort_order")),
        order_by,
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}
