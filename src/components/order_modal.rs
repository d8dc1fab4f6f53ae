//! Order Modal Component
//!
//! Overlay with the new order form. Clicking the dimmed backdrop closes it.

use leptos::*;
use wasm_bindgen::JsValue;

use crate::state::order::{self, OrderForm, DEFAULT_UNIT};
use crate::state::{use_app_state, ClickTarget};

/// New order modal
#[component]
pub fn OrderModal() -> impl IntoView {
    let state = use_app_state();
    let modal = state.modal;
    let submitting = state.submitting_order;
    let form_ref = create_node_ref::<html::Form>();

    let submit_state = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(form) = form_ref.get_untracked() else {
            return;
        };
        let order = match read_form(&form) {
            Ok(fields) => fields.into_order(),
            Err(e) => {
                tracing::error!(error = ?e, "failed to read order form");
                return;
            }
        };

        submit_state.submit_order(order, move || {
            if let Some(form) = form_ref.get_untracked() {
                form.reset();
            }
        });
    };

    let click_state = state.clone();
    let on_overlay_click = move |ev: web_sys::MouseEvent| {
        let target = if ev.target() == ev.current_target() {
            ClickTarget::Backdrop
        } else {
            ClickTarget::Content
        };
        click_state.modal_click(target);
    };

    view! {
        <div
            id="orderModal"
            class="modal"
            style:display=move || modal.get().display()
            on:click=on_overlay_click
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h2>"Add New Order"</h2>
                    <button type="button" class="close-btn" on:click=move |_| state.close_modal()>
                        "×"
                    </button>
                </div>

                <form id="orderForm" node_ref=form_ref on:submit=on_submit>
                    <FormField label="Vendor Name">
                        <input type="text" name="vendor_name" required placeholder="e.g. ABC Textiles" />
                    </FormField>
                    <FormField label="GST Number">
                        <input type="text" name="gst_number" placeholder="33XXXXX0000Z0" />
                    </FormField>
                    <FormField label="Item Name">
                        <input type="text" name="item_name" required placeholder="e.g. Cotton Yarn" />
                    </FormField>

                    <div class="form-row">
                        <FormField label="Quantity">
                            <input type="number" name="quantity" step="any" min="0" required />
                        </FormField>
                        <FormField label="Unit">
                            <select name="unit">
                                <option value=DEFAULT_UNIT selected>{DEFAULT_UNIT}</option>
                                <option value="Metre">"Metre"</option>
                                <option value="Piece">"Piece"</option>
                                <option value="Bundle">"Bundle"</option>
                            </select>
                        </FormField>
                    </div>

                    <div class="form-row">
                        <FormField label="Unit Price (₹)">
                            <input type="number" name="unit_price" step="0.01" min="0" required />
                        </FormField>
                        <FormField label="Order Date">
                            <input type="date" name="order_date" value=order::today() />
                        </FormField>
                    </div>

                    <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Saving..." } else { "Add Order" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn FormField(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            {children()}
        </label>
    }
}

/// Read every text entry of the form, in document order
fn read_form(form: &web_sys::HtmlFormElement) -> Result<OrderForm, JsValue> {
    let data = web_sys::FormData::new_with_form(form)?;
    let mut entries = Vec::new();

    if let Some(iter) = js_sys::try_iter(&data)? {
        for entry in iter {
            let pair = js_sys::Array::from(&entry?);
            let (Some(key), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) else {
                continue;
            };
            entries.push((key, value));
        }
    }

    Ok(OrderForm::from_entries(entries))
}
