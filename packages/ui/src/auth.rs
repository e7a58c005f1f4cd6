//! Authentication context and hooks.
//!
//! The session lives in a cookie held by the browser; the client never
//! stores a token. [`AuthProvider`] probes `/api/users/me` once at mount
//! and everything downstream reads the resulting flags.

use dioxus::prelude::*;

/// Session flags derived from the mount-time probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuthState {
    pub authenticated: bool,
    pub verified: bool,
    /// True while the probe is still in flight.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            authenticated: false,
            verified: false,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Flip the context to logged-in after a successful login call.
pub fn mark_logged_in(auth: &mut Signal<AuthState>, verified: bool) {
    auth.set(AuthState {
        authenticated: true,
        verified,
        loading: false,
    });
}

/// Clear the context on logout.
pub fn mark_logged_out(auth: &mut Signal<AuthState>) {
    auth.set(AuthState {
        authenticated: false,
        verified: false,
        loading: false,
    });
}

/// Provider component that manages authentication state.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Probe the session once on mount. The future is dropped, and the
    // request with it, if the provider unmounts first.
    let _probe = use_resource(move || async move {
        match api::client().current_user().await {
            Ok(user) => {
                auth_state.set(AuthState {
                    authenticated: true,
                    verified: user.verified,
                    loading: false,
                });
            }
            Err(err) => {
                tracing::debug!("session probe: {err}");
                auth_state.set(AuthState {
                    authenticated: false,
                    verified: false,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// True once the probe has settled without a session. While the probe is
/// still loading nothing should redirect.
fn session_missing(state: &AuthState) -> bool {
    !state.loading && !state.authenticated
}

/// Gate for protected pages: nothing while the probe is in flight, the
/// children once authenticated, otherwise a router redirect to the 401
/// page. The redirect is a route replacement, so the app shell and the
/// probed auth state survive it.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if session_missing(&auth()) {
            nav.replace("/unauthorized");
        }
    });

    if !auth().authenticated {
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_redirect_while_probe_is_loading() {
        assert!(!session_missing(&AuthState::default()));
    }

    #[test]
    fn no_redirect_for_a_live_session() {
        let state = AuthState {
            authenticated: true,
            verified: false,
            loading: false,
        };
        assert!(!session_missing(&state));
    }

    #[test]
    fn settled_probe_without_session_redirects() {
        let state = AuthState {
            authenticated: false,
            verified: false,
            loading: false,
        };
        assert!(session_missing(&state));
    }
}
