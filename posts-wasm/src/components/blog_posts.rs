use leptos::prelude::*;
use posts_client::Post;

#[component]
pub(crate) fn BlogPosts(posts: Vec<Post>) -> impl IntoView {
    view! {
        <div id="blog-posts">
            <h2>"The Latest Posts"</h2>
            <ul>
                <For
                    each=move || posts.clone()
                    key=|post| post.id
                    children=move |post| {
                        view! {
                            <li>
                                <article>
                                    <h2>{post.title}</h2>
                                    <p>{post.text}</p>
                                </article>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
