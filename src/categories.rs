// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Category;
use once_cell::sync::Lazy;

static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    [
        ("purchases", "Compras", "shopping-bag", "#5636D3"),
        ("food", "Alimentação", "coffee", "#FF872C"),
        ("salary", "Salário", "dollar-sign", "#12A454"),
        ("car", "Carro", "crosshair", "#E83F5B"),
        ("leisure", "Lazer", "heart", "#26195C"),
        ("studies", "Estudos", "book", "#9C001A"),
    ]
    .into_iter()
    .map(|(key, name, icon, color)| Category {
        key: key.into(),
        name: name.into(),
        icon: icon.into(),
        color: color.into(),
    })
    .collect()
});

/// The fixed registry, in display order.
pub fn all() -> &'static [Category] {
    &CATEGORIES
}

pub fn find(key: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.key == key)
}
