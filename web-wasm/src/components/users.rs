//! ユーザー管理

use leptos::prelude::*;
use leptos::task::spawn_local;
use dg_review_common::{NewUser, User, UserPatch, USER_ROLES};
use crate::api;

const STATUSES: [(&str, &str); 2] = [("active", "Active"), ("inactive", "Inactive")];

fn empty_form() -> NewUser {
    NewUser {
        role: "Viewer".to_string(),
        status: Some("active".to_string()),
        ..Default::default()
    }
}

fn role_select_value(form: &NewUser) -> String {
    form.role.clone()
}

fn status_select_value(status: Option<&str>) -> String {
    status.unwrap_or(STATUSES[0].0).to_string()
}

fn today() -> String {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    iso.chars().take(10).collect()
}

#[component]
pub fn Users() -> impl IntoView {
    let users = RwSignal::new(Vec::<User>::new());
    let form = RwSignal::new(empty_form());
    let editing = RwSignal::new(None::<User>);

    spawn_local(async move {
        match api::fetch_users().await {
            Ok(list) => users.set(list),
            Err(e) => api::log_error("users", &e),
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut new_user = form.get();
        new_user.last_activity = Some(today());
        spawn_local(async move {
            match api::create_user(&new_user).await {
                Ok(user) => {
                    users.update(|list| list.push(user));
                    form.set(empty_form());
                }
                Err(e) => api::log_error("create user", &e),
            }
        });
    };

    let on_delete = move |id: u64| {
        spawn_local(async move {
            match api::delete_user(id).await {
                Ok(_) => users.update(|list| list.retain(|u| u.id != id)),
                Err(e) => api::log_error("delete user", &e),
            }
        });
    };

    let on_save = move || {
        let Some(edited) = editing.get() else {
            return;
        };
        spawn_local(async move {
            match api::update_user(edited.id, &UserPatch::from(&edited)).await {
                Ok(user) => {
                    users.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|u| u.id == user.id) {
                            *slot = user;
                        }
                    });
                    editing.set(None);
                }
                Err(e) => api::log_error("update user", &e),
            }
        });
    };

    view! {
        <div>
            <h2>"Users"</h2>
            <form class="user-form" on:submit=on_submit>
                <input
                    placeholder="Name"
                    required
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.name = value);
                    }
                />
                <input
                    placeholder="Email"
                    type="email"
                    required
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.email = value);
                    }
                />
                <select
                    prop:value=move || form.with(role_select_value)
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.role = value);
                    }
                >
                    {USER_ROLES
                        .into_iter()
                        .map(|role| view! {
                            <option value=role selected=move || form.with(|f| f.role == role)>{role}</option>
                        })
                        .collect_view()}
                </select>
                <select
                    prop:value=move || form.with(|f| status_select_value(f.status.as_deref()))
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.status = Some(value));
                    }
                >
                    {STATUSES
                        .into_iter()
                        .map(|(value, label)| view! {
                            <option
                                value=value
                                selected=move || form.with(|f| f.status.as_deref() == Some(value))
                            >
                                {label}
                            </option>
                        })
                        .collect_view()}
                </select>
                <button type="submit" class="btn btn-primary">"Add"</button>
            </form>
            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Status"</th>
                        <th>"Last Activity"</th>
                        <th></th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || users.get()
                        key=|u| (u.id, u.name.clone(), u.email.clone(), u.role.clone(), u.status.clone())
                        children=move |user| {
                            let id = user.id;
                            let is_editing = move || editing.with(|e| e.as_ref().map(|u| u.id) == Some(id));
                            let row = user.clone();
                            view! {
                                <Show
                                    when=is_editing
                                    fallback=move || {
                                        let u = row.clone();
                                        view! {
                                            <tr>
                                                <td>{u.name.clone()}</td>
                                                <td>{u.email.clone()}</td>
                                                <td>{u.role.clone()}</td>
                                                <td>{u.status.clone()}</td>
                                                <td>{u.last_activity.clone()}</td>
                                                <td>
                                                    <button on:click=move |_| editing.set(Some(u.clone()))>"Edit"</button>
                                                </td>
                                                <td>
                                                    <button on:click=move |_| on_delete(id)>"Delete"</button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                >
                                    <EditRow editing=editing last_activity=user.last_activity.clone() on_save=on_save />
                                </Show>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

/// 編集中の行
#[component]
fn EditRow<F>(editing: RwSignal<Option<User>>, last_activity: String, on_save: F) -> impl IntoView
where
    F: Fn() + Copy + 'static,
{
    let field = move |get: fn(&User) -> String| {
        move || editing.with(|e| e.as_ref().map(get).unwrap_or_default())
    };

    view! {
        <tr>
            <td>
                <input
                    prop:value=field(|u| u.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        editing.update(|e| if let Some(u) = e { u.name = value; });
                    }
                />
            </td>
            <td>
                <input
                    prop:value=field(|u| u.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        editing.update(|e| if let Some(u) = e { u.email = value; });
                    }
                />
            </td>
            <td>
                <select
                    prop:value=field(|u| u.role.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        editing.update(|e| if let Some(u) = e { u.role = value; });
                    }
                >
                    {USER_ROLES
                        .into_iter()
                        .map(|role| view! {
                            <option
                                value=role
                                selected=move || editing.with(|e| e.as_ref().is_some_and(|u| u.role == role))
                            >
                                {role}
                            </option>
                        })
                        .collect_view()}
                </select>
            </td>
            <td>
                <select
                    prop:value=field(|u| status_select_value(Some(u.status.as_str())))
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        editing.update(|e| if let Some(u) = e { u.status = value; });
                    }
                >
                    {STATUSES
                        .into_iter()
                        .map(|(value, label)| view! {
                            <option
                                value=value
                                selected=move || editing.with(|e| e.as_ref().is_some_and(|u| u.status == value))
                            >
                                {label}
                            </option>
                        })
                        .collect_view()}
                </select>
            </td>
            <td>{last_activity}</td>
            <td>
                <button on:click=move |_| on_save()>"Save"</button>
            </td>
            <td>
                <button on:click=move |_| editing.set(None)>"Cancel"</button>
            </td>
        </tr>
    }
}
