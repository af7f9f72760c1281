//! Page components.

use leptos::prelude::*;
use leptos::server_fn::error::ServerFnError;
use leptos_meta::*;
use shopfront_commerce::prelude::*;

// ============================================================================
// Shell (SSR entry point)
// ============================================================================

#[cfg(feature = "ssr")]
pub fn shell(options: leptos::config::LeptosOptions) -> impl IntoView {
    use leptos::hydration::{AutoReload, HydrationScripts};
    use leptos::view;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options=options.clone() root=""/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = RwSignal::new(Storefront::new());
    let products = Resource::new(|| (), |_| get_products());

    Effect::new(move |_| {
        if let Some(result) = products.get() {
            store.update(|s| match result {
                Ok(products) => s.load_catalog(products),
                Err(e) => s.fail_loading(e.to_string()),
            });
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/shopfront_web.css"/>
        <Title text="Shopfront"/>

        <main class="container">
            <h1>"Our Products"</h1>
            <ProductGrid store=store/>
            <CartPanel store=store/>
            <ProductDetails store=store/>
        </main>
    }
}

// ============================================================================
// Catalog
// ============================================================================

#[component]
fn ProductGrid(store: RwSignal<Storefront>) -> impl IntoView {
    move || {
        store.with(|s| match s.status() {
            CatalogStatus::Loading => view! { <ProductGridSkeleton/> }.into_any(),
            CatalogStatus::Failed(message) => view! {
                <p class="error">"Error loading products: " {message.clone()}</p>
            }
            .into_any(),
            CatalogStatus::Ready(_) => view! {
                <div class="products">
                    {s.product_views()
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product store=store/> })
                        .collect::<Vec<_>>()}
                </div>
            }
            .into_any(),
        })
    }
}

#[component]
fn ProductCard(product: ProductView, store: RwSignal<Storefront>) -> impl IntoView {
    let view_id = product.id.clone();
    let add_id = product.id.clone();
    let image = product.image.clone().unwrap_or_default();

    view! {
        <div class="product-card">
            <img src=image alt=product.name.clone() class="product-image"/>
            <div class="product-info">
                <h3>{product.name.clone()}</h3>
                {product.category.clone().map(|c| view! { <span class="badge">{c}</span> })}
                <p class="description clamp">{product.description.clone()}</p>
                <p class="price">{product.price_label.clone()}</p>
                {product
                    .stock_badge
                    .is_warning()
                    .then(|| view! { <span class="badge destructive">{product.stock_label.clone()}</span> })}
            </div>
            <div class="card-actions">
                <button
                    class="btn outline"
                    on:click=move |_| {
                        store.update(|s| {
                            if let Err(e) = s.view(&view_id) {
                                tracing::warn!(error = %e, "Cannot open details");
                            }
                        })
                    }
                >
                    "Details"
                </button>
                <button
                    class="btn"
                    disabled=!product.add_to_cart_enabled
                    on:click=move |_| {
                        store.update(|s| {
                            if let Err(e) = s.add_to_cart(&add_id) {
                                tracing::warn!(error = %e, "Add to cart refused");
                            }
                        })
                    }
                >
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}

// ============================================================================
// Details Overlay
// ============================================================================

#[component]
fn ProductDetails(store: RwSignal<Storefront>) -> impl IntoView {
    move || {
        store.with(|s| s.selected_view()).map(|product| {
            let badge_class = if product.stock_badge.is_warning() {
                "badge destructive"
            } else {
                "badge outline"
            };
            view! {
                <div class="overlay">
                    <div class="overlay-card">
                        <div class="overlay-header">
                            <h2>{product.name.clone()}</h2>
                            <button class="btn ghost" on:click=move |_| store.update(|s| s.close_details())>
                                "×"
                            </button>
                        </div>
                        <img
                            src=product.image.clone().unwrap_or_default()
                            alt=product.name.clone()
                            class="overlay-image"
                        />
                        <div class="badges">
                            {product.category.clone().map(|c| view! { <span class="badge">{c}</span> })}
                            <span class=badge_class>{product.stock_label.clone()}</span>
                        </div>
                        <p class="description">{product.description.clone()}</p>
                        <p class="price large">{product.price_label.clone()}</p>
                        <button
                            class="btn wide"
                            disabled=!product.add_to_cart_enabled
                            on:click=move |_| {
                                store.update(|s| {
                                    if let Err(e) = s.add_selected_to_cart() {
                                        tracing::warn!(error = %e, "Add to cart refused");
                                    }
                                })
                            }
                        >
                            "Add to Cart"
                        </button>
                    </div>
                </div>
            }
        })
    }
}

// ============================================================================
// Cart Panel
// ============================================================================

#[component]
fn CartPanel(store: RwSignal<Storefront>) -> impl IntoView {
    let cart = Memo::new(move |_| store.with(|s| s.cart_view()));

    view! {
        <section class="cart">
            <h2>"Shopping Cart"</h2>
            {move || {
                let cart = cart.get();
                if cart.is_empty {
                    return view! { <p class="muted">"Your cart is empty"</p> }.into_any();
                }
                view! {
                    <div class="cart-lines">
                        {cart.lines.into_iter().map(|line| view! { <CartRow line=line store=store/> }).collect::<Vec<_>>()}
                    </div>
                    <div class="cart-total">
                        <strong>"Total:"</strong>
                        <strong>{cart.total_label}</strong>
                    </div>
                    <button class="btn wide">"Proceed to Checkout"</button>
                }
                .into_any()
            }}
        </section>
    }
}

#[component]
fn CartRow(line: CartLineView, store: RwSignal<Storefront>) -> impl IntoView {
    let quantity = i64::from(line.quantity);
    let dec_id = line.product_id.clone();
    let inc_id = line.product_id.clone();

    let set_quantity = move |id: &ProductId, quantity: i64| {
        store.update(|s| {
            if let Err(e) = s.update_quantity(id, quantity) {
                tracing::warn!(error = %e, "Quantity change refused");
            }
        })
    };

    view! {
        <div class="cart-line">
            <div>
                <p class="name">{line.name}</p>
                <p class="muted small">{line.unit_label}</p>
            </div>
            <div class="stepper">
                <button
                    class="btn outline small"
                    disabled=!line.can_decrement
                    on:click=move |_| set_quantity(&dec_id, quantity - 1)
                >
                    "−"
                </button>
                <span class="qty">{line.quantity.to_string()}</span>
                <button
                    class="btn outline small"
                    disabled=!line.can_increment
                    on:click=move |_| set_quantity(&inc_id, quantity + 1)
                >
                    "+"
                </button>
            </div>
        </div>
    }
}

// ============================================================================
// Skeleton Components (Loading States)
// ============================================================================

#[component]
fn ProductGridSkeleton() -> impl IntoView {
    view! {
        <div class="products">
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
        </div>
    }
}

#[component]
fn ProductCardSkeleton() -> impl IntoView {
    view! {
        <div class="product-card">
            <div class="skeleton" style="width: 100%; height: 12rem;"></div>
            <div class="product-info">
                <div class="skeleton" style="width: 80%; height: 1.5rem; margin-bottom: 0.5rem;"></div>
                <div class="skeleton" style="width: 40%; height: 1.25rem;"></div>
            </div>
        </div>
    }
}

// ============================================================================
// Server Functions (API)
// ============================================================================

/// Full product list from the CMS.
#[leptos::server(prefix = "/api")]
pub async fn get_products() -> Result<Vec<Product>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use shopfront_cms::{CatalogSource, CmsCatalog, CmsConfig, SpinTransport};

        let config = CmsConfig::from_lookup(|key| spin_sdk::variables::get(key).ok())
            .map_err(|e| ServerFnError::new(format!("Configuration error: {}", e)))?;
        let catalog = CmsCatalog::new(config, SpinTransport)
            .map_err(|e| ServerFnError::new(format!("Configuration error: {}", e)))?;

        catalog.fetch_products().await.map_err(|e| {
            tracing::error!(error = %e, "Error fetching products");
            ServerFnError::new("Failed to fetch products")
        })
    }

    #[cfg(not(feature = "ssr"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
