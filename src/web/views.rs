use v_htmlescape::escape;

use super::state::{PageSettings, Theme, ViewState};
use crate::catalog::{self, BillingCycle, Plan, Price};
use crate::comparison::ComparisonMatrix;

/// How a plan card fills its price slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceDisplay {
    Discounted {
        amount: u32,
        original: u32,
        percent_off: u32,
    },
    Plain(u32),
    Literal(&'static str),
}

impl PriceDisplay {
    pub fn for_plan(plan: &Plan) -> Self {
        match plan.price {
            Price::Label(label) => PriceDisplay::Literal(label),
            Price::Amount(amount) => match (plan.original_price, plan.discount_percent()) {
                (Some(original), Some(percent_off)) => PriceDisplay::Discounted {
                    amount,
                    original,
                    percent_off,
                },
                _ => PriceDisplay::Plain(amount),
            },
        }
    }
}

pub fn render_pricing_page(state: ViewState, settings: &PageSettings) -> String {
    let plans = catalog::plans(state.billing);
    let preloads: String = settings
        .preload_images
        .iter()
        .map(|src| format!(r#"<link rel="preload" as="image" href="{src}">"#))
        .collect();
    let dialog = if state.comparison_open {
        render_comparison_dialog(&ComparisonMatrix::build(&plans, settings.universe), state)
    } else {
        String::new()
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Pricing</title>
    {preloads}
    <script src="https://unpkg.com/htmx.org@1.9.12"></script>
    <style>
        .theme-light {{
            color-scheme: light;
            --page-bg: linear-gradient(135deg, #eff6ff, #e0e7ff);
            --text: #111827;
            --muted: #4b5563;
            --card-bg: #ffffff;
            --card-border: rgba(148, 163, 184, 0.35);
            --pill-bg: #ffffff;
        }}
        .theme-dark {{
            color-scheme: dark;
            --page-bg: #111827;
            --text: #f9fafb;
            --muted: #d1d5db;
            --card-bg: #1f2937;
            --card-border: rgba(148, 163, 184, 0.18);
            --pill-bg: #1f2937;
        }}
        body {{
            margin: 0;
        }}
        .page {{
            min-height: 100vh;
            font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
            background: var(--page-bg);
            color: var(--text);
        }}
        main {{
            width: min(1280px, 94vw);
            margin: 0 auto;
            padding: 3rem 0;
        }}
        .theme-bar {{
            display: flex;
            justify-content: flex-end;
        }}
        .theme-toggle {{
            display: inline-flex;
            padding: 0.5rem;
            border-radius: 999px;
            background: #e5e7eb;
            text-decoration: none;
            font-size: 1.4rem;
            box-shadow: 0 4px 10px rgba(15, 23, 42, 0.15);
        }}
        header {{
            text-align: center;
            margin-bottom: 3rem;
        }}
        header h1 {{
            margin: 0 0 2rem;
            font-size: clamp(2.2rem, 5vw, 3rem);
            font-weight: 800;
            letter-spacing: -0.02em;
        }}
        header h1 span {{
            background: linear-gradient(90deg, #3b82f6, #a855f7);
            -webkit-background-clip: text;
            background-clip: text;
            color: transparent;
        }}
        header p {{
            margin: 0 auto;
            max-width: 42rem;
            font-size: 1.25rem;
            color: var(--muted);
        }}
        .billing {{
            display: flex;
            justify-content: center;
            margin-bottom: 3rem;
        }}
        .billing-pill {{
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            padding: 0.25rem;
            border-radius: 999px;
            background: var(--pill-bg);
            box-shadow: 0 10px 25px rgba(15, 23, 42, 0.12);
        }}
        .billing-pill span {{
            padding: 0.5rem 1rem;
            color: #6b7280;
        }}
        .billing-pill span.active {{
            color: #2563eb;
            font-weight: 600;
        }}
        .switch {{
            position: relative;
            width: 44px;
            height: 24px;
            border-radius: 999px;
            background: #d1d5db;
        }}
        .switch::after {{
            content: '';
            position: absolute;
            top: 2px;
            left: 2px;
            width: 20px;
            height: 20px;
            border-radius: 50%;
            background: #ffffff;
            transition: left 0.2s ease;
        }}
        .switch.on {{
            background: #2563eb;
        }}
        .switch.on::after {{
            left: 22px;
        }}
        .plans {{
            display: grid;
            grid-template-columns: 1fr;
            gap: 2rem;
        }}
        @media (min-width: 768px) {{
            .plans {{ grid-template-columns: repeat(2, 1fr); }}
        }}
        @media (min-width: 1024px) {{
            .plans {{ grid-template-columns: repeat(4, 1fr); }}
        }}
        .card {{
            position: relative;
            display: flex;
            flex-direction: column;
            overflow: hidden;
            padding: 1.5rem;
            border-radius: 14px;
            border: 1px solid var(--card-border);
            background: var(--card-bg);
            transition: transform 0.3s ease, border-color 0.3s ease;
        }}
        .card:hover {{
            border-color: #93c5fd;
        }}
        .card.popular {{
            border: 2px solid #3b82f6;
            background: linear-gradient(180deg, #1e3a8a, #1d4ed8);
            color: #ffffff;
        }}
        .card.popular:hover {{
            transform: scale(1.05);
        }}
        .ribbon {{
            position: absolute;
            top: 0;
            right: 0;
            padding: 0.25rem 0.75rem;
            background: #2563eb;
            color: #ffffff;
            font-size: 0.75rem;
            font-weight: 700;
            border-bottom-left-radius: 6px;
        }}
        .card h3 {{
            margin: 0;
            font-size: 1.5rem;
        }}
        .price {{
            margin-top: 1rem;
        }}
        .price .amount {{
            font-size: 2.25rem;
            font-weight: 800;
        }}
        .price .period,
        .card .description {{
            color: var(--muted);
        }}
        .price .literal {{
            font-size: 1.9rem;
            font-weight: 800;
        }}
        .badge {{
            display: inline-flex;
            padding: 0.1rem 0.5rem;
            border-radius: 4px;
            background: #dcfce7;
            color: #166534;
            font-size: 0.75rem;
            font-weight: 600;
        }}
        .original {{
            margin-left: 0.5rem;
            font-weight: 700;
            text-decoration: line-through;
            color: #6b7280;
        }}
        .credits {{
            margin-top: 0.5rem;
            color: #2563eb;
            font-weight: 600;
        }}
        .card.popular .credits,
        .card.popular .period,
        .card.popular .description,
        .card.popular .original {{
            color: #dbeafe;
        }}
        .features {{
            list-style: none;
            padding: 0;
            margin: 1.5rem 0 0;
            display: grid;
            gap: 0.75rem;
            font-size: 0.9rem;
        }}
        .features li::before {{
            content: '\2713';
            margin-right: 0.75rem;
            color: #22c55e;
        }}
        .extras {{
            margin-top: auto;
        }}
        .extras hr {{
            margin: 1.5rem 0;
            border: 0;
            border-top: 1px solid #3b82f6;
        }}
        .extras .features {{
            margin: 0;
            font-size: 0.78rem;
            gap: 0.5rem;
        }}
        .cta {{
            margin-top: 1.5rem;
        }}
        .cta button {{
            width: 100%;
            padding: 0.75rem 1rem;
            border: none;
            border-radius: 8px;
            background: #2563eb;
            color: #ffffff;
            font-size: 1rem;
            font-weight: 600;
            cursor: pointer;
        }}
        .card.popular .cta button {{
            background: #ffffff;
            color: #2563eb;
        }}
        .compare {{
            margin-top: 3rem;
            text-align: center;
        }}
        .compare a {{
            font-size: 1.1rem;
            color: #2563eb;
        }}
        .theme-dark .compare a {{
            color: #d1d5db;
        }}
        dialog {{
            width: min(56rem, 92vw);
            max-height: 80vh;
            overflow-y: auto;
            border: none;
            border-radius: 14px;
            padding: 1.5rem 2rem;
            background: var(--card-bg);
            color: var(--text);
            box-shadow: 0 40px 70px rgba(15, 23, 42, 0.45);
        }}
        dialog h2 {{
            margin: 0 0 1rem;
        }}
        .dialog-close {{
            float: right;
            text-decoration: none;
            font-size: 1.25rem;
            color: var(--muted);
        }}
        table {{
            width: 100%;
            border-collapse: collapse;
        }}
        th, td {{
            text-align: left;
            padding: 0.6rem 0.75rem;
            border-top: 1px solid var(--card-border);
        }}
        tbody tr:hover {{
            background: rgba(148, 163, 184, 0.12);
        }}
        .mark-yes {{
            color: #22c55e;
        }}
        .mark-no {{
            color: #9ca3af;
        }}
    </style>
</head>
<body hx-boost="true">
<div class="page theme-{theme}">
<main id="pricing">
    <div class="theme-bar">{theme_toggle}</div>
    <header>
        <h1>Pricing that scales with<br><span>your growth</span></h1>
        <p>Designed for every stage of your journey.<br>Start today, no credit card required.</p>
    </header>
    {billing_toggle}
    <section class="plans">
        {cards}
    </section>
    {compare_trigger}
    {dialog}
</main>
</div>
</body>
</html>"##,
        preloads = preloads,
        theme = state.theme.as_str(),
        theme_toggle = render_theme_toggle(state),
        billing_toggle = render_billing_toggle(state),
        cards = render_plan_cards(&plans, state.billing),
        compare_trigger = render_comparison_trigger(state),
        dialog = dialog,
    )
}

pub fn render_theme_toggle(state: ViewState) -> String {
    // Shows the theme the visitor would switch to.
    let icon = match state.theme {
        Theme::Light => "&#9790;",
        Theme::Dark => "&#9728;",
    };
    format!(
        r#"<a class="theme-toggle" href="{href}" aria-label="Toggle theme">{icon}</a>"#,
        href = link(state.toggle_theme()),
        icon = icon,
    )
}

pub fn render_billing_toggle(state: ViewState) -> String {
    let next = state.with_billing_cycle(state.billing.toggled());
    let active = |cycle: BillingCycle| if state.billing == cycle { " class=\"active\"" } else { "" };
    let switch_class = match state.billing {
        BillingCycle::Monthly => "switch",
        BillingCycle::Annual => "switch on",
    };
    format!(
        r#"<div class="billing"><div class="billing-pill"><span{monthly}>{monthly_label}</span><a class="{switch_class}" role="switch" aria-checked="{checked}" aria-label="Bill annually" href="{href}"></a><span{annual}>{annual_label}</span></div></div>"#,
        monthly = active(BillingCycle::Monthly),
        monthly_label = BillingCycle::Monthly,
        annual = active(BillingCycle::Annual),
        annual_label = BillingCycle::Annual,
        switch_class = switch_class,
        checked = state.billing == BillingCycle::Annual,
        href = link(next),
    )
}

pub fn render_plan_cards(plans: &[Plan], billing: BillingCycle) -> String {
    plans
        .iter()
        .map(|plan| render_plan_card(plan, billing))
        .collect()
}

pub fn render_plan_card(plan: &Plan, billing: BillingCycle) -> String {
    let name = escape(plan.name);
    let (card_class, ribbon) = if plan.highlighted {
        ("card popular", r#"<div class="ribbon">Popular</div>"#)
    } else {
        ("card", "")
    };
    let credits = plan
        .credits
        .map(|credits| {
            format!(
                r#"<div class="credits">{} Credits</div>"#,
                format_thousands(credits)
            )
        })
        .unwrap_or_default();
    let description = plan
        .description
        .map(|text| format!(r#"<p class="description">{}</p>"#, escape(text)))
        .unwrap_or_default();
    let extras = if plan.additional_features.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="extras"><hr><ul class="features">{}</ul></div>"#,
            render_feature_items(plan.additional_features)
        )
    };

    format!(
        r#"<article class="{card_class}" id="plan-{slug}">{ribbon}<h3>{name}</h3>{price}{credits}{description}<ul class="features">{features}</ul>{extras}<form class="cta" method="post" action="/plans/select" hx-post="/plans/select" hx-swap="none"><input type="hidden" name="plan" value="{name}"><button type="submit" aria-label="Select {name} plan">{cta} &rarr;</button></form></article>"#,
        card_class = card_class,
        slug = escape(&plan.name.to_ascii_lowercase()),
        ribbon = ribbon,
        name = name,
        price = render_price_block(plan, billing),
        credits = credits,
        description = description,
        features = render_feature_items(plan.features),
        extras = extras,
        cta = escape(plan.cta),
    )
}

pub fn render_price_block(plan: &Plan, billing: BillingCycle) -> String {
    match PriceDisplay::for_plan(plan) {
        PriceDisplay::Discounted {
            amount,
            original,
            percent_off,
        } => format!(
            r#"<div class="price"><div><span class="amount">${amount}</span><span class="period">/{period}</span></div><div><span class="badge">{percent_off}% off</span><span class="original">${original}</span></div></div>"#,
            period = billing.period(),
        ),
        PriceDisplay::Plain(amount) => format!(
            r#"<div class="price"><span class="amount">${amount}</span><span class="period">/{period}</span></div>"#,
            period = billing.period(),
        ),
        PriceDisplay::Literal(label) => format!(
            r#"<div class="price"><span class="literal">{}</span></div>"#,
            escape(label)
        ),
    }
}

fn render_feature_items(features: &[&str]) -> String {
    features
        .iter()
        .map(|feature| format!("<li>{}</li>", escape(feature)))
        .collect()
}

pub fn render_comparison_trigger(state: ViewState) -> String {
    format!(
        r#"<div class="compare"><a href="{href}" title="Click to see a detailed comparison of all plans">Compare Plans &#9432;</a></div>"#,
        href = link(state.with_comparison_open(true)),
    )
}

pub fn render_comparison_dialog(matrix: &ComparisonMatrix, state: ViewState) -> String {
    let headers: String = matrix
        .plan_names
        .iter()
        .map(|name| format!("<th>{}</th>", escape(name)))
        .collect();
    let rows: String = matrix
        .rows
        .iter()
        .map(|row| {
            let cells: String = row
                .cells
                .iter()
                .map(|included| {
                    if *included {
                        r#"<td><span class="mark-yes" aria-label="Included">&#10003;</span></td>"#
                    } else {
                        r#"<td><span class="mark-no">-</span></td>"#
                    }
                })
                .collect();
            format!("<tr><td>{}</td>{}</tr>", escape(row.feature), cells)
        })
        .collect();

    format!(
        r#"<dialog open aria-labelledby="comparison-title"><a class="dialog-close" href="{close}" aria-label="Close comparison">&times;</a><h2 id="comparison-title">Plan Comparison</h2><table><thead><tr><th>Feature</th>{headers}</tr></thead><tbody>{rows}</tbody></table></dialog>"#,
        close = link(state.with_comparison_open(false)),
        headers = headers,
        rows = rows,
    )
}

/// Query-string link to `state`, ready for an attribute value.
fn link(state: ViewState) -> String {
    state.href().replace('&', "&amp;")
}

/// Groups digits in threes, e.g. `25000` becomes `25,000`.
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_plan;

    fn growth_card(billing: BillingCycle) -> String {
        let plan = find_plan(billing, "Growth").expect("growth");
        render_plan_card(&plan, billing)
    }

    #[test]
    fn growth_monthly_shows_discount() {
        let card = growth_card(BillingCycle::Monthly);
        assert!(card.contains(r#"<span class="amount">$229</span>"#));
        assert!(card.contains(r#"<span class="original">$459</span>"#));
        assert!(card.contains("50% off"));
        assert!(card.contains("/month"));
        assert!(card.contains("8,000 Credits"));
    }

    #[test]
    fn growth_annual_shows_annual_figures() {
        let card = growth_card(BillingCycle::Annual);
        assert!(card.contains("$2290"));
        assert!(card.contains("$4590"));
        assert!(card.contains("50% off"));
        assert!(card.contains("/year"));
    }

    #[test]
    fn trial_price_text_is_identical_across_cycles() {
        let monthly = find_plan(BillingCycle::Monthly, "Trial").expect("trial");
        let annual = find_plan(BillingCycle::Annual, "Trial").expect("trial");
        let before = render_price_block(&monthly, BillingCycle::Monthly);
        let after = render_price_block(&annual, BillingCycle::Annual);
        assert_eq!(before, after);
        assert!(before.contains("Try Now"));
    }

    #[test]
    fn price_display_modes_are_exclusive() {
        let mut plan = find_plan(BillingCycle::Monthly, "Growth").expect("growth");
        assert_eq!(
            PriceDisplay::for_plan(&plan),
            PriceDisplay::Discounted {
                amount: 229,
                original: 459,
                percent_off: 50
            }
        );

        plan.original_price = None;
        assert_eq!(PriceDisplay::for_plan(&plan), PriceDisplay::Plain(229));
        let block = render_price_block(&plan, BillingCycle::Monthly);
        assert!(!block.contains("off"));
        assert!(!block.contains("original"));

        let enterprise = find_plan(BillingCycle::Monthly, "Enterprise").expect("enterprise");
        assert_eq!(
            PriceDisplay::for_plan(&enterprise),
            PriceDisplay::Literal("Contact Us")
        );
    }

    #[test]
    fn highlighted_plan_gets_ribbon() {
        let booster = find_plan(BillingCycle::Monthly, "Booster").expect("booster");
        let card = render_plan_card(&booster, BillingCycle::Monthly);
        assert!(card.contains("Popular"));
        assert!(card.contains("card popular"));
        assert!(!growth_card(BillingCycle::Monthly).contains("Popular"));
    }

    #[test]
    fn card_lists_primary_and_supplementary_features() {
        let growth = growth_card(BillingCycle::Monthly);
        assert!(growth.contains("Credit rollover (upto 2x plan credits)"));
        let booster = find_plan(BillingCycle::Monthly, "Booster").expect("booster");
        let card = render_plan_card(&booster, BillingCycle::Monthly);
        assert!(card.contains("<hr>"));
        assert!(card.contains("Fully enriched 15000 leads"));
    }

    #[test]
    fn page_renders_dialog_only_when_open() {
        let settings = PageSettings::default();
        let closed = render_pricing_page(ViewState::default(), &settings);
        assert!(!closed.contains("<dialog"));
        assert!(closed.contains("Compare Plans"));

        let open = render_pricing_page(ViewState::default().with_comparison_open(true), &settings);
        assert!(open.contains("<dialog open"));
        assert!(open.contains("Plan Comparison"));
        assert!(open.contains(r#"href="/?billing=monthly&amp;theme=light&amp;compare=false""#));
    }

    #[test]
    fn page_links_carry_the_rest_of_the_state() {
        let settings = PageSettings::default();
        let state = ViewState::default().toggle_theme();
        let page = render_pricing_page(state, &settings);
        assert!(page.contains(r#"<div class="page theme-dark">"#));
        assert!(page.contains(r#"href="/?billing=annual&amp;theme=dark&amp;compare=false""#));
        assert!(page.contains(r#"href="/?billing=monthly&amp;theme=light&amp;compare=false""#));
    }

    #[test]
    fn page_preloads_images() {
        let page = render_pricing_page(ViewState::default(), &PageSettings::default());
        assert!(page.contains(r#"<link rel="preload" as="image" href="/images/pricing-bg.jpg">"#));
        assert!(page.contains(r#"href="/images/logo.svg""#));
    }

    #[test]
    fn comparison_dialog_marks_presence() {
        let plans = catalog::plans(BillingCycle::Monthly);
        let matrix = ComparisonMatrix::build(&plans, Default::default());
        let dialog = render_comparison_dialog(&matrix, ViewState::default());
        assert_eq!(
            dialog.matches("mark-yes").count(),
            matrix.rows.iter().map(|row| row.marker_count()).sum::<usize>()
        );
        assert!(dialog.contains("<th>Enterprise</th>"));
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(8000), "8,000");
        assert_eq!(format_thousands(25000), "25,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }
}
