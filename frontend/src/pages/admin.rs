use yew::prelude::*;

use crate::components::admin_login::AdminLogin;
use crate::components::admin_panel::AdminPanel;
use crate::styles;

/// Operator view: PIN gate first, dashboard once unlocked. The unlock is
/// per-visit component state and never persisted, so a reload re-locks.
#[function_component(Admin)]
pub fn admin() -> Html {
    let unlocked = use_state(|| false);

    let on_unlock = {
        let unlocked = unlocked.clone();
        Callback::from(move |_| unlocked.set(true))
    };

    html! {
        <div class={styles::ADMIN_PAGE}>
            if *unlocked {
                <AdminPanel />
            } else {
                <AdminLogin {on_unlock} />
            }
        </div>
    }
}
