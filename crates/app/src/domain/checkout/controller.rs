//! Checkout controller.
//!
//! Drives a single checkout screen through
//! `Loading -> Ready -> Submitting -> Confirmed`, falling back to `Ready` when
//! the backend refuses the order. The state lock is only held between awaits.

use std::{fmt, mem, sync::Arc};

use parking_lot::Mutex;
use tracing::{debug, error, info, warn};

use crate::{
    api::{ApiError, CartsApi, OrdersApi},
    domain::{
        carts::models::Cart,
        checkout::{
            errors::CheckoutError,
            models::{CheckoutForm, CheckoutRequest, PriceBreakdown},
        },
        orders::models::Order,
        profiles::models::PersonId,
    },
};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum CheckoutState {
    /// No cart has been loaded for checkout yet.
    #[default]
    Loading,

    /// Waiting for the user to fill in and submit the form. `error` holds the
    /// message from the last failed attempt.
    Ready {
        cart: Cart,
        form: CheckoutForm,
        error: Option<String>,
    },

    /// A checkout request is in flight.
    Submitting { cart: Cart, form: CheckoutForm },

    /// The order was placed.
    Confirmed { order: Order },
}

impl CheckoutState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready { .. } => "ready",
            Self::Submitting { .. } => "submitting",
            Self::Confirmed { .. } => "confirmed",
        }
    }

    pub fn form(&self) -> Option<&CheckoutForm> {
        match self {
            Self::Ready { form, .. } | Self::Submitting { form, .. } => Some(form),
            Self::Loading | Self::Confirmed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Ready { error, .. } => error.as_deref(),
            Self::Loading | Self::Submitting { .. } | Self::Confirmed { .. } => None,
        }
    }
}

pub struct CheckoutController {
    carts: Arc<dyn CartsApi>,
    orders: Arc<dyn OrdersApi>,
    state: Mutex<CheckoutState>,
}

impl fmt::Debug for CheckoutController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutController")
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}

impl CheckoutController {
    pub fn new(carts: Arc<dyn CartsApi>, orders: Arc<dyn OrdersApi>) -> Self {
        Self {
            carts,
            orders,
            state: Mutex::new(CheckoutState::Loading),
        }
    }

    pub fn state(&self) -> CheckoutState {
        self.state.lock().clone()
    }

    /// The form as last entered, while one exists.
    pub fn form(&self) -> Option<CheckoutForm> {
        self.state.lock().form().cloned()
    }

    /// Edit the form in place. Returns `false` when there is no editable form.
    pub fn update_form(&self, edit: impl FnOnce(&mut CheckoutForm)) -> bool {
        match &mut *self.state.lock() {
            CheckoutState::Ready { form, .. } => {
                edit(form);

                true
            }
            CheckoutState::Loading
            | CheckoutState::Submitting { .. }
            | CheckoutState::Confirmed { .. } => false,
        }
    }

    /// Display-only split of whichever total is on screen.
    pub fn price_breakdown(&self) -> Option<PriceBreakdown> {
        match &*self.state.lock() {
            CheckoutState::Ready { cart, .. } | CheckoutState::Submitting { cart, .. } => {
                Some(PriceBreakdown::from_total(cart.total_amount))
            }
            CheckoutState::Confirmed { order } => {
                Some(PriceBreakdown::from_total(order.total_amount))
            }
            CheckoutState::Loading => None,
        }
    }

    /// Load the cart and open a fresh form.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when the customer has no cart or
    /// an empty one, [`CheckoutError::AlreadySubmitting`] while an order is
    /// in flight, and [`CheckoutError::LoadCart`] when the cart cannot be
    /// fetched.
    pub async fn enter(&self, customer: PersonId) -> Result<Cart, CheckoutError> {
        {
            let mut state = self.state.lock();

            if matches!(*state, CheckoutState::Submitting { .. }) {
                return Err(CheckoutError::AlreadySubmitting);
            }

            *state = CheckoutState::Loading;
        }

        let cart = match self.carts.get_cart(customer).await {
            Ok(cart) => cart,
            Err(source) if source.is_not_found() => {
                debug!(%customer, "checkout entered without a cart");

                return Err(CheckoutError::EmptyCart);
            }
            Err(source) => {
                error!(%customer, "failed to load cart for checkout: {source}");

                return Err(CheckoutError::LoadCart(source));
            }
        };

        if cart.is_empty() {
            debug!(%customer, "checkout entered with an empty cart");

            return Err(CheckoutError::EmptyCart);
        }

        info!(%customer, items = cart.total_items, total = %cart.total_amount, "checkout ready");

        *self.state.lock() = CheckoutState::Ready {
            cart: cart.clone(),
            form: CheckoutForm::default(),
            error: None,
        };

        Ok(cart)
    }

    /// Place the order.
    ///
    /// The form is kept whatever happens, so a failed attempt can be retried
    /// without re-entering anything.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any request when an address is
    /// missing, [`CheckoutError::AlreadySubmitting`] while another submission
    /// is in flight, and [`CheckoutError::Submit`] when the backend refuses
    /// the order.
    pub async fn submit(
        &self,
        customer: PersonId,
        form: CheckoutForm,
    ) -> Result<Order, CheckoutError> {
        let request = self.begin_submit(form)?;

        info!(%customer, payment_method = %request.payment_method, "submitting checkout");

        match self.orders.checkout(customer, request).await {
            Ok(order) => {
                info!(
                    %customer,
                    order = %order.order_id,
                    total = %order.total_amount,
                    "order placed"
                );

                *self.state.lock() = CheckoutState::Confirmed {
                    order: order.clone(),
                };

                Ok(order)
            }
            Err(source) => {
                log_failure(customer, &source);

                let error = CheckoutError::Submit(source);

                self.fail_submit(error.user_message());

                Err(error)
            }
        }
    }

    /// Throw the form away and start over. Has no effect while an order is
    /// in flight; returns whether the state was reset.
    pub fn cancel(&self) -> bool {
        let mut state = self.state.lock();

        if matches!(*state, CheckoutState::Submitting { .. }) {
            warn!("cannot cancel checkout while the order is being placed");

            return false;
        }

        debug!(from = state.name(), "checkout cancelled");

        *state = CheckoutState::Loading;

        true
    }

    fn begin_submit(&self, form: CheckoutForm) -> Result<CheckoutRequest, CheckoutError> {
        let mut state = self.state.lock();

        match mem::take(&mut *state) {
            CheckoutState::Ready { cart, .. } => match form.validate() {
                Ok(request) => {
                    *state = CheckoutState::Submitting { cart, form };

                    Ok(request)
                }
                Err(error) => {
                    debug!("checkout form invalid: {error}");

                    *state = CheckoutState::Ready {
                        cart,
                        form,
                        error: Some(error.user_message()),
                    };

                    Err(error)
                }
            },
            submitting @ CheckoutState::Submitting { .. } => {
                warn!("checkout submitted again while in flight, ignoring");

                *state = submitting;

                Err(CheckoutError::AlreadySubmitting)
            }
            confirmed @ CheckoutState::Confirmed { .. } => {
                *state = confirmed;

                Err(CheckoutError::AlreadyConfirmed)
            }
            CheckoutState::Loading => Err(CheckoutError::NotReady),
        }
    }

    fn fail_submit(&self, message: String) {
        let mut state = self.state.lock();

        *state = match mem::take(&mut *state) {
            CheckoutState::Submitting { cart, form } => CheckoutState::Ready {
                cart,
                form,
                error: Some(message),
            },
            other => other,
        };
    }
}

fn log_failure(customer: PersonId, source: &ApiError) {
    match source {
        ApiError::Rejected { .. } | ApiError::NotFound { .. } => {
            warn!(%customer, status = ?source.status(), "checkout rejected: {source}");
        }
        ApiError::Transport(_) | ApiError::Timeout | ApiError::UnexpectedResponse(_) => {
            error!(%customer, "checkout failed: {source}");
        }
    }
}
