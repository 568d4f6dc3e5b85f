//! Manual verification checklists
//!
//! The form endpoints feed a datastore and an email pipeline that this
//! tool cannot inspect directly. After a run with at least one passing
//! submission, the operator finishes verification by hand using these
//! instructions.

/// Supabase dashboard for the production project
const DASHBOARD_URL: &str =
    "https://supabase.com/dashboard/project/tpcunhpbrxpfzxzwrzwz/editor";

/// Print the datastore and email verification checklists.
pub fn print_manual_verification_steps(test_email: &str) {
    println!("\n{}", "=".repeat(60));
    println!("SUPABASE VERIFICATION INSTRUCTIONS");
    println!("{}\n", "=".repeat(60));

    println!("1. Open Supabase Dashboard:");
    println!("   {DASHBOARD_URL}");
    println!("\n2. Check these tables for new records:");
    println!("   - quote_requests (main quote form)");
    println!("   - contact_submissions (contact form)");
    println!("   - quote_requests_mini (quick quote)");
    println!("\n3. Verify fields:");
    println!("   - Name: Claude Test User");
    println!("   - Email: {test_email}");
    println!("   - Company: Anderson Test Company / Test Company");
    println!("   - created_at: Should be within last few minutes");
    println!("\n4. Check for test identifier:");
    println!("   - Look for: 'automated testing script' in notes/message fields");

    println!("\n{}", "=".repeat(60));
    println!("EMAIL VERIFICATION INSTRUCTIONS");
    println!("{}\n", "=".repeat(60));

    println!("1. Check your inbox: {test_email}");
    println!("2. Look for emails from: anderson-cleaning-site.vercel.app");
    println!("3. Expected emails:");
    println!("   - Quote Request Confirmation");
    println!("   - Contact Form Confirmation");
    println!("   - Quick Quote Confirmation");
    println!("\n4. Check spam folder if not in inbox");
    println!("\n5. Verify email content includes test data");
}
