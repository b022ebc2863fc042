use leptos::prelude::*;

use super::active_class;

/// A menu item shown as a card and in the details modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub image: &'static str,
}

struct Group {
    id: &'static str,
    label: &'static str,
    items: &'static [Product],
}

const GROUPS: &[Group] = &[
    Group {
        id: "coffee",
        label: "Coffee",
        items: &[
            Product {
                title: "Espresso",
                description: "Our house blend, pulled short. Notes of cocoa and dried fig.",
                price: "€1.40",
                image: "assets/img/espresso.jpg",
            },
            Product {
                title: "Flat white",
                description: "Double ristretto with silky whole milk.",
                price: "€3.20",
                image: "assets/img/flat-white.jpg",
            },
            Product {
                title: "Filter of the week",
                description: "A rotating single origin brewed on the V60.",
                price: "€3.80",
                image: "assets/img/filter.jpg",
            },
        ],
    },
    Group {
        id: "pastry",
        label: "Pastry",
        items: &[
            Product {
                title: "Pastel de nata",
                description: "Baked every hour. Cinnamon on the side.",
                price: "€1.60",
                image: "assets/img/nata.jpg",
            },
            Product {
                title: "Butter croissant",
                description: "Laminated over three days.",
                price: "€2.20",
                image: "assets/img/croissant.jpg",
            },
        ],
    },
    Group {
        id: "beans",
        label: "Beans",
        items: &[
            Product {
                title: "Aurora house blend 250g",
                description: "Brazil and Ethiopia, medium roast. Whole bean or ground to order.",
                price: "€11.00",
                image: "assets/img/beans-house.jpg",
            },
            Product {
                title: "Decaf Colombia 250g",
                description: "Sugarcane process, sweet and round.",
                price: "€12.50",
                image: "assets/img/beans-decaf.jpg",
            },
        ],
    },
];

#[component]
fn ProductCard(product: Product, selected: RwSignal<Option<Product>>) -> impl IntoView {
    view! {
        <article class="product-card">
            <img src=product.image alt=product.title loading="lazy" />
            <div class="product-info">
                <h3>{product.title}</h3>
                <p class="product-price">{product.price}</p>
                <a
                    href="#"
                    class="btn btn-outline"
                    on:click=move |ev| {
                        ev.prevent_default();
                        selected.set(Some(product));
                    }
                >
                    "Details"
                </a>
            </div>
        </article>
    }
}

#[component]
pub fn Products(selected: RwSignal<Option<Product>>) -> impl IntoView {
    let tab = RwSignal::new(GROUPS[0].id);

    view! {
        <section id="products" class="section products" data-section="products">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Menu"</h2>
                </div>

                <div class="product-tabs" role="tablist">
                    {GROUPS
                        .iter()
                        .map(|group| {
                            let id = group.id;
                            view! {
                                <button
                                    class=move || active_class("tab-button", tab.get() == id)
                                    role="tab"
                                    data-tab=id
                                    aria-selected=move || (tab.get() == id).to_string()
                                    on:click=move |_| tab.set(id)
                                >
                                    {group.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                {GROUPS
                    .iter()
                    .map(|group| {
                        let id = group.id;
                        view! {
                            <div
                                id=format!("tab-{id}")
                                class=move || active_class("tab-content", tab.get() == id)
                                role="tabpanel"
                            >
                                <div class="product-grid">
                                    {group
                                        .items
                                        .iter()
                                        .map(|&product| view! { <ProductCard product=product selected=selected /> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
