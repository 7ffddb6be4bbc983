use leptos::prelude::*;

struct Post {
    title: &'static str,
    date: &'static str,
    excerpt: &'static str,
    tag: &'static str,
}

const POSTS: &[Post] = &[
    Post {
        title: "Choosing a lehenga for a winter wedding",
        date: "12 Jan 2026",
        excerpt: "Velvet, heavier zardozi and jewel tones: how to stay warm without losing the drape.",
        tag: "Bridal",
    },
    Post {
        title: "Temple jewelry, explained",
        date: "28 Dec 2025",
        excerpt: "Where the style comes from, what to look for in the goldwork and how to pair it.",
        tag: "Jewelry",
    },
    Post {
        title: "Mandap ideas for small venues",
        date: "3 Dec 2025",
        excerpt: "Floral canopies, fabric drapes and lighting that make a courtyard feel grand.",
        tag: "Decor",
    },
    Post {
        title: "A groom's sherwani checklist",
        date: "19 Nov 2025",
        excerpt: "Fittings, stoles, safas and mojaris, with a timeline that works back from the day.",
        tag: "Groom",
    },
];

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <h1>"The Bliss Journal"</h1>
        <div class="post-grid">
            {POSTS
                .iter()
                .map(|p| view! {
                    <article class="post-card">
                        <span class="tag">{p.tag}</span>
                        <h2>{p.title}</h2>
                        <p class="muted">{p.date}</p>
                        <p>{p.excerpt}</p>
                    </article>
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
