//! Built-in demo snapshot. This is the dataset the shell ships with until
//! a real data source exists; `snapshot.loadDemo` installs it verbatim.

use crate::model::{
    Classroom, Material, Payment, PaymentRequest, Snapshot, Student, TeacherProfile,
};

fn s(v: &str) -> String {
    v.to_string()
}

pub fn demo_snapshot() -> Snapshot {
    Snapshot {
        classrooms: vec![
            Classroom {
                id: s("1"),
                name: s("Class 10 Mathematics"),
                subject: s("Mathematics • Grade 10"),
                student_count: 25,
                mode: s("Hybrid").into(),
                timing: s("2:00 PM"),
                next_class: s("Today 2:00 PM"),
                status: s("Active").into(),
                image: s("https://images.pexels.com/photos/5212317/pexels-photo-5212317.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=2"),
                location: Some(s("Sharma Tuition Center, Main Market")),
                meeting_link: Some(s("meet.google.com/abc-defg-hij")),
            },
            Classroom {
                id: s("2"),
                name: s("Physics Mastery"),
                subject: s("Physics • Grade 11-12"),
                student_count: 18,
                mode: s("Online").into(),
                timing: s("4:30 PM"),
                next_class: s("Tomorrow 4:30 PM"),
                status: s("Upcoming").into(),
                image: s("https://images.pexels.com/photos/5428836/pexels-photo-5428836.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=2"),
                location: None,
                meeting_link: Some(s("zoom.us/j/123456789")),
            },
            Classroom {
                id: s("3"),
                name: s("Chemistry Lab"),
                subject: s("Chemistry • Grade 12"),
                student_count: 22,
                mode: s("Offline").into(),
                timing: s("6:00 PM"),
                next_class: s("Tomorrow 6:00 PM"),
                status: s("Active").into(),
                image: s("https://images.pexels.com/photos/2280571/pexels-photo-2280571.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=2"),
                location: Some(s("Science Laboratory, School Campus")),
                meeting_link: None,
            },
        ],
        students: vec![
            Student {
                id: s("1"),
                name: s("Rahul Sharma"),
                class_label: s("Grade 10 - Mathematics"),
                parent_name: s("Suresh Sharma"),
                phone: s("+91 98765 43210"),
                email: Some(s("rahul.sharma@email.com")),
                address: s("Main Market, Sector 15, Gurgaon"),
                enrollment_date: s("Jan 15, 2024"),
                total_classes: 45,
                attended_classes: 42,
                payment_status: s("Paid").into(),
                last_payment: s("Nov 1, 2024"),
                avatar: s("https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=2"),
                performance: s("Excellent").into(),
                subjects: vec![s("Mathematics"), s("Physics")],
            },
            Student {
                id: s("2"),
                name: s("Priya Patel"),
                class_label: s("Grade 12 - Chemistry"),
                parent_name: s("Ramesh Patel"),
                phone: s("+91 87654 32109"),
                email: None,
                address: s("Nehru Nagar, Block A, Delhi"),
                enrollment_date: s("Feb 20, 2024"),
                total_classes: 38,
                attended_classes: 35,
                payment_status: s("Pending").into(),
                last_payment: s("Oct 15, 2024"),
                avatar: s("https://images.pexels.com/photos/1181686/pexels-photo-1181686.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=2"),
                performance: s("Good").into(),
                subjects: vec![s("Chemistry"), s("Biology")],
            },
            Student {
                id: s("3"),
                name: s("Amit Kumar"),
                class_label: s("Grade 11 - Physics"),
                parent_name: s("Vinod Kumar"),
                phone: s("+91 76543 21098"),
                email: None,
                address: s("Gandhi Nagar, Sector 8, Noida"),
                enrollment_date: s("Mar 5, 2024"),
                total_classes: 40,
                attended_classes: 28,
                payment_status: s("Overdue").into(),
                last_payment: s("Sep 10, 2024"),
                avatar: s("https://images.pexels.com/photos/1674752/pexels-photo-1674752.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=2"),
                performance: s("Average").into(),
                subjects: vec![s("Physics"), s("Mathematics")],
            },
            Student {
                id: s("4"),
                name: s("Sunita Devi"),
                class_label: s("Grade 10 - Mathematics"),
                parent_name: s("Rajesh Devi"),
                phone: s("+91 65432 10987"),
                email: None,
                address: s("Laxmi Nagar, Delhi"),
                enrollment_date: s("Apr 12, 2024"),
                total_classes: 35,
                attended_classes: 33,
                payment_status: s("Paid").into(),
                last_payment: s("Nov 5, 2024"),
                avatar: s("https://images.pexels.com/photos/1181690/pexels-photo-1181690.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=2"),
                performance: s("Good").into(),
                subjects: vec![s("Mathematics")],
            },
            Student {
                id: s("5"),
                name: s("Vikas Gupta"),
                class_label: s("Grade 12 - Chemistry"),
                parent_name: s("Ashok Gupta"),
                phone: s("+91 54321 09876"),
                email: None,
                address: s("Vasant Kunj, New Delhi"),
                enrollment_date: s("May 8, 2024"),
                total_classes: 32,
                attended_classes: 30,
                payment_status: s("Paid").into(),
                last_payment: s("Oct 28, 2024"),
                avatar: s("https://images.pexels.com/photos/1043471/pexels-photo-1043471.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=2"),
                performance: s("Excellent").into(),
                subjects: vec![s("Chemistry"), s("Mathematics")],
            },
        ],
        payment_requests: vec![
            PaymentRequest {
                id: s("1"),
                title: s("November 2024 - Math Fees"),
                amount: 2500,
                due_date: s("Nov 30, 2024"),
                students_count: 25,
                paid_count: 18,
                status: s("Active").into(),
                description: s("Monthly fees for Grade 10 Mathematics"),
                created_date: s("Nov 1, 2024"),
            },
            PaymentRequest {
                id: s("2"),
                title: s("Physics Special Class Fees"),
                amount: 1500,
                due_date: s("Nov 25, 2024"),
                students_count: 18,
                paid_count: 15,
                status: s("Active").into(),
                description: s("Special class for exam preparation"),
                created_date: s("Nov 15, 2024"),
            },
            PaymentRequest {
                id: s("3"),
                title: s("October 2024 - Chemistry Fees"),
                amount: 2000,
                due_date: s("Oct 31, 2024"),
                students_count: 22,
                paid_count: 22,
                status: s("Completed").into(),
                description: s("Monthly fees for Grade 12 Chemistry"),
                created_date: s("Oct 1, 2024"),
            },
            PaymentRequest {
                id: s("4"),
                title: s("September 2024 - Math Fees"),
                amount: 2500,
                due_date: s("Sep 30, 2024"),
                students_count: 25,
                paid_count: 20,
                status: s("Overdue").into(),
                description: s("Monthly fees for Grade 10 Mathematics"),
                created_date: s("Sep 1, 2024"),
            },
        ],
        recent_payments: vec![
            Payment {
                id: s("1"),
                student_name: s("Rahul Sharma"),
                amount: 2500,
                request_title: s("November 2024 - Math Fees"),
                payment_date: s("Nov 28, 2024"),
                status: s("Paid").into(),
                method: s("UPI").into(),
            },
            Payment {
                id: s("2"),
                student_name: s("Priya Patel"),
                amount: 1500,
                request_title: s("Physics Special Class Fees"),
                payment_date: s("Nov 27, 2024"),
                status: s("Paid").into(),
                method: s("Cash").into(),
            },
            Payment {
                id: s("3"),
                student_name: s("Amit Kumar"),
                amount: 2000,
                request_title: s("October 2024 - Chemistry Fees"),
                payment_date: s("Nov 26, 2024"),
                status: s("Paid").into(),
                method: s("Bank Transfer").into(),
            },
            Payment {
                id: s("4"),
                student_name: s("Sunita Devi"),
                amount: 2500,
                request_title: s("November 2024 - Math Fees"),
                payment_date: s("Nov 25, 2024"),
                status: s("Pending").into(),
                method: s("UPI").into(),
            },
        ],
        materials: vec![
            Material {
                id: s("1"),
                title: s("Quadratic Equations - Practice Problems"),
                kind: s("PDF").into(),
                upload_date: s("2 days ago"),
                size: Some(s("2.4 MB")),
            },
            Material {
                id: s("2"),
                title: s("Algebra Basics Video Lecture"),
                kind: s("Video").into(),
                upload_date: s("1 week ago"),
                size: Some(s("45 min")),
            },
            Material {
                id: s("3"),
                title: s("Khan Academy - Trigonometry"),
                kind: s("Link").into(),
                upload_date: s("3 days ago"),
                size: Some(s("External")),
            },
        ],
        profile: TeacherProfile {
            name: s("Priya Sharma"),
            bio: s("Mathematics and Science Teacher • 8 years experience"),
            subjects: s("Mathematics, Physics, Chemistry"),
            experience: s("8 years"),
            rating: 4.8,
            avatar: s("https://images.pexels.com/photos/1181690/pexels-photo-1181690.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=2"),
        },
    }
}
