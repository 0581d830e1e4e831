use boost_desk::pricing::calculator::MINIMUM_QUANTITY_MILLIONS;
use boost_desk::pricing::{
    compute_credit_farming_price, compute_powerleveling_price, format_usd, CreditTier,
    PriceBreakdown, TankClass,
};
use colored::Colorize;

/// Execute `quote credit-farm`
pub fn credit_farm(tier: CreditTier, amount: f64, exclude_own_boosters: bool) {
    let breakdown = compute_credit_farming_price(tier, amount, exclude_own_boosters);

    println!("{}", "Credit Farming Quote".bold());
    println!("  {}: {}", "WN8 Tier".cyan(), tier.label());
    println!("  {}: {}M credits", "Amount".cyan(), amount);
    println!(
        "  {}: {}",
        "Silver Boosters".cyan(),
        if exclude_own_boosters {
            "not used (+30%)"
        } else {
            "used"
        }
    );
    println!();

    if breakdown.is_zero() {
        if amount.is_finite() && amount >= MINIMUM_QUANTITY_MILLIONS {
            println!("{}", "Amount is too large".red());
        } else {
            println!("{}", "Minimum 1 million credits required".red());
        }
    }
    print_breakdown(&breakdown);
}

/// Execute `quote powerleveling`
pub fn powerleveling(class: TankClass) {
    let breakdown = compute_powerleveling_price(class);

    println!("{}", "Powerleveling Quote".bold());
    println!("  {}: {}", "Tank Type".cyan(), class.label());
    println!("  {}", class.description().dimmed());
    println!();

    print_breakdown(&breakdown);
}

fn print_breakdown(breakdown: &PriceBreakdown) {
    println!("  Base price:     {}", format_usd(breakdown.base_price));
    if breakdown.discount_percent > 0 {
        println!(
            "  Discount ({}%): -{}",
            breakdown.discount_percent,
            format_usd(breakdown.discount_amount)
        );
    }
    if breakdown.surcharge_amount > 0.0 {
        println!("  Surcharge:      +{}", format_usd(breakdown.surcharge_amount));
    }
    println!(
        "  {}:          {}",
        "Total".bold(),
        format_usd(breakdown.final_price).green().bold()
    );
}
