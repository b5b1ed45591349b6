//! HTML bodies for the transactional emails.

use chrono::NaiveDateTime;

use crate::{BookingConfirmation, ContactMessage};

/// "Saturday, 1 June 2024" style date for the confirmation email.
pub fn format_session_date(date: NaiveDateTime) -> String {
    date.format("%A, %-d %B %Y").to_string()
}

pub fn render_booking_confirmation(details: &BookingConfirmation) -> String {
    let session_type = if details.session_type == "online" {
        "Online"
    } else {
        "In-Person"
    };

    let notes_block = details
        .notes
        .as_deref()
        .filter(|notes| !notes.is_empty())
        .map(|notes| {
            format!(
                r#"<div class="notes"><strong>Additional Notes:</strong><p>{}</p></div>"#,
                notes
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<style>
  body {{ font-family: 'Arial', sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px; }}
  .header {{ background: #1d4ed8; color: white; padding: 30px; text-align: center; border-radius: 10px 10px 0 0; }}
  .content {{ background: #f8f9fa; padding: 30px; border-radius: 0 0 10px 10px; }}
  .reference {{ background: #1d4ed8; color: white; padding: 15px; border-radius: 8px; text-align: center; font-size: 20px; font-weight: bold; margin: 20px 0; letter-spacing: 2px; }}
  .details {{ background: white; padding: 20px; border-radius: 8px; margin: 20px 0; }}
  .row {{ display: flex; justify-content: space-between; padding: 12px 0; border-bottom: 1px solid #e9ecef; }}
  .row:last-child {{ border-bottom: none; }}
  .label {{ font-weight: 600; color: #1d4ed8; }}
  .notes {{ background: white; padding: 15px; border-radius: 8px; margin: 20px 0; }}
  .footer {{ text-align: center; margin-top: 30px; padding-top: 20px; border-top: 2px solid #e9ecef; color: #6c757d; font-size: 14px; }}
</style>
</head>
<body>
  <div class="header">
    <h1>TutorHub</h1>
    <p>Your Booking is Confirmed!</p>
  </div>
  <div class="content">
    <p>Dear {student_name},</p>
    <p>Thank you for booking a tutoring session with TutorHub!</p>
    <div class="reference">Booking Reference: {reference}</div>
    <div class="details">
      <h2>Session Details</h2>
      <div class="row"><span class="label">Tutor:</span><span>{tutor_name}</span></div>
      <div class="row"><span class="label">Subject:</span><span>{subject}</span></div>
      <div class="row"><span class="label">Level:</span><span>{level}</span></div>
      <div class="row"><span class="label">Date:</span><span>{date}</span></div>
      <div class="row"><span class="label">Time:</span><span>{time}</span></div>
      <div class="row"><span class="label">Duration:</span><span>{duration} minutes</span></div>
      <div class="row"><span class="label">Session Type:</span><span>{session_type}</span></div>
      <div class="row"><span class="label">Amount:</span><span>&pound;{amount:.2}</span></div>
    </div>
    {notes_block}
    <p>You will receive a reminder email 24 hours before your session. If you
    need to make changes, please contact us and quote your booking reference.</p>
    <div class="footer">
      <p><strong>TutorHub</strong></p>
      <p>Please save this email for your records.</p>
    </div>
  </div>
</body>
</html>"#,
        student_name = details.student_name,
        reference = details.booking_reference,
        tutor_name = details.tutor_name,
        subject = details.subject,
        level = details.level,
        date = format_session_date(details.session_date),
        time = details.session_time,
        duration = details.duration_minutes,
        session_type = session_type,
        amount = details.amount,
        notes_block = notes_block,
    )
}

pub fn render_contact_message(message: &ContactMessage) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<body style="font-family: 'Arial', sans-serif; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
  <h2>New contact form message</h2>
  <p><strong>From:</strong> {name} &lt;{email}&gt;</p>
  <div style="background: #f8f9fa; padding: 20px; border-radius: 8px; white-space: pre-wrap;">{body}</div>
</body>
</html>"#,
        name = message.name,
        email = message.email,
        body = message.message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_confirmation() -> BookingConfirmation {
        BookingConfirmation {
            booking_reference: "TH-9X3K2A".to_string(),
            student_name: "Jamie".to_string(),
            student_email: "jamie@example.com".to_string(),
            tutor_name: "Alex".to_string(),
            subject: "Maths".to_string(),
            level: "GCSE".to_string(),
            session_date: NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(14, 0, 0)
                .unwrap(),
            session_time: "14:00".to_string(),
            duration_minutes: 90,
            session_type: "online".to_string(),
            amount: 60.0,
            notes: None,
        }
    }

    #[test]
    fn session_date_formats_long_form() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        assert_eq!(format_session_date(date), "Saturday, 1 June 2024");
    }

    #[test]
    fn confirmation_includes_reference_and_amount() {
        let html = render_booking_confirmation(&sample_confirmation());
        assert!(html.contains("TH-9X3K2A"));
        assert!(html.contains("&pound;60.00"));
        assert!(html.contains("Saturday, 1 June 2024"));
        assert!(html.contains("90 minutes"));
        assert!(!html.contains("Additional Notes"));
    }

    #[test]
    fn confirmation_renders_notes_when_present() {
        let mut details = sample_confirmation();
        details.notes = Some("Please cover quadratic equations".to_string());
        let html = render_booking_confirmation(&details);
        assert!(html.contains("Additional Notes"));
        assert!(html.contains("quadratic equations"));
    }

    #[test]
    fn contact_message_carries_sender_and_body() {
        let html = render_contact_message(&ContactMessage {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            subject: Some("Tutoring enquiry".to_string()),
            message: "Do you cover A-Level Physics?".to_string(),
        });
        assert!(html.contains("sam@example.com"));
        assert!(html.contains("A-Level Physics"));
    }
}
