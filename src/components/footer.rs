use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer id="footer" class="site-footer">
            <h2>{"Get in touch"}</h2>
            <p>{"Questions about BiRefNet or want to use it in your product? We'd love to hear from you."}</p>
            <a href="https://github.com/ZhengPeng7/BiRefNet" target="_blank" rel="noopener noreferrer" class="footer-contact">
                {"BiRefNet on GitHub"}
            </a>
            <style>
                {r#"
                .site-footer {
                    text-align: center;
                    padding: 4rem 1rem;
                    margin-top: 4rem;
                    background: #0f172a;
                    color: #e2e8f0;
                }
                .site-footer h2 {
                    font-size: 1.875rem;
                    margin-bottom: 1rem;
                }
                .footer-contact {
                    color: #f5a524;
                    font-weight: 600;
                }
                "#}
            </style>
        </footer>
    }
}
